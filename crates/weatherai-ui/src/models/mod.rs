pub mod selector_model;
