pub use as_num::AsNum;
pub use plain_enum::*;
pub use derive_new::new;
pub use failure::{bail, Error};
pub use openskat_logging::{debug, info};
pub use openskat_util::*;
