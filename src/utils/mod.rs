pub mod seconds;
