//! Background cron jobs.

pub mod no_show;
