pub mod charge;
pub mod crc;
pub mod emv;
pub mod key;
pub mod merchant;
pub mod money;
pub mod payload;
pub mod ports;
