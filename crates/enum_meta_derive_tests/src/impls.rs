use enum_meta::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumMeta)]
#[repr(i32)]
pub enum Animal {
    Cat = -5,
    Dog,
    Horse = 7,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumMeta)]
#[repr(i64)]
pub enum Car {
    Bmw = -1,
    Chevy,
    Nissan = 6,
    Mazda,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumMeta)]
#[repr(u8)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumMeta)]
#[repr(u8)]
pub enum Flag {
    First = 254,
    Last,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumMeta)]
#[repr(isize)]
pub enum Only {
    Lonely,
}
