mod inputs;
mod models;
