pub mod splash;
