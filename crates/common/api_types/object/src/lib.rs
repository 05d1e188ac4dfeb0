pub mod object;
pub mod quoted;
pub mod system_state;
