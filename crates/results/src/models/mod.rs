mod gender;
mod result;
mod swimmer;
mod swim_time;

pub use self::gender::Gender;
pub use self::result::SwimResult;
pub use self::swimmer::Swimmer;
pub use self::swim_time::SwimTime;
