pub mod copy_engine;
pub mod error;
pub mod logging;
pub mod path;

pub mod commands {
    pub mod fileutil;
}
