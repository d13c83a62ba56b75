pub mod toon;
