pub mod u601_record_actions;
