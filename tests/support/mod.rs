#![allow(dead_code)]

pub mod alert;
pub mod assertions;
