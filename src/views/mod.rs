/*
* Server-rendered HTML pages built with maud.
*/

pub mod layout;
pub mod pages;
