#[path = "property/editable_values.rs"]
mod editable_values;

#[path = "property/status_mapping.rs"]
mod status_mapping;
