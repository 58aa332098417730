mod binding_flow;
mod cli;
mod isolation;
mod scenario;
mod serialization;
mod table;
