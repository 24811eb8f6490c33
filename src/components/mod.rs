pub mod splash;
pub mod splash_frames;
pub mod stat_bar;
