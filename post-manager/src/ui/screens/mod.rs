pub mod posts_screen;
