pub mod submit_time_entry;
