mod add_communication_to_case;
mod describe_cases;
mod describe_communications;
mod resolve_case;

pub use add_communication_to_case::*;
pub use describe_cases::*;
pub use describe_communications::*;
pub use resolve_case::*;
