pub mod access_event;
pub mod anomaly;
pub mod body_temp;
pub mod direction;
pub mod presence;
