#[path = "scenario/construction.rs"]
mod construction;

#[path = "scenario/round_trip.rs"]
mod round_trip;

#[path = "scenario/live_state.rs"]
mod live_state;

#[path = "scenario/transport.rs"]
mod transport;
