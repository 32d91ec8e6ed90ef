// HTTP handlers, one module per endpoint group.

pub mod recommend;
pub mod scorecard;
