pub mod c2s;
pub mod url;
