pub mod get_activities;
pub mod get_activity;
pub mod search_activities;
pub mod search_activities_by_title;
