pub use as_num::AsNum;
pub use plain_enum::*;
pub use failure::{bail, Error};
pub use openskat_logging::info;
pub use openskat_util::*;
