//! Hand-written `EnumMeta` implementations. The derive is exercised in the
//! enum-meta-derive-tests crate; these tests cover the registry itself,
//! including cases the derive cannot produce.

use enum_meta::{EnumMeta, Variant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum Animal {
    Cat = -5,
    Dog = -4,
    Horse = 7,
}

impl EnumMeta for Animal {
    type Repr = i32;

    const VARIANTS: &'static [Variant<Self>] = &[
        Variant {
            name: "Cat",
            value: Animal::Cat,
        },
        Variant {
            name: "Dog",
            value: Animal::Dog,
        },
        Variant {
            name: "Horse",
            value: Animal::Horse,
        },
    ];

    fn to_repr(self) -> i32 {
        self as i32
    }

    fn from_repr(repr: i32) -> Option<Self> {
        match repr {
            -5 => Some(Animal::Cat),
            -4 => Some(Animal::Dog),
            7 => Some(Animal::Horse),
            _ => None,
        }
    }
}

// Declaration order deliberately disagrees with numeric order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Priority {
    High = 10,
    Low = 1,
    Mid = 5,
}

impl EnumMeta for Priority {
    type Repr = u8;

    const VARIANTS: &'static [Variant<Self>] = &[
        Variant {
            name: "High",
            value: Priority::High,
        },
        Variant {
            name: "Low",
            value: Priority::Low,
        },
        Variant {
            name: "Mid",
            value: Priority::Mid,
        },
    ];

    fn to_repr(self) -> u8 {
        self as u8
    }

    fn from_repr(repr: u8) -> Option<Self> {
        match repr {
            10 => Some(Priority::High),
            1 => Some(Priority::Low),
            5 => Some(Priority::Mid),
            _ => None,
        }
    }
}

// A zero-variant enum cannot have an integer repr, so this case only exists
// through a hand-written impl.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Never {}

impl EnumMeta for Never {
    type Repr = i32;

    const VARIANTS: &'static [Variant<Self>] = &[];

    fn to_repr(self) -> i32 {
        match self {}
    }

    fn from_repr(_repr: i32) -> Option<Self> {
        None
    }
}

// A variant list with a duplicate name and a duplicate value. rustc rejects
// both inside one enum declaration, so the registry's last-write-wins rule
// is only reachable through a hand-written impl.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Dup {
    A = 1,
    B = 2,
}

impl EnumMeta for Dup {
    type Repr = u8;

    const VARIANTS: &'static [Variant<Self>] = &[
        Variant {
            name: "A",
            value: Dup::A,
        },
        Variant {
            name: "A",
            value: Dup::B,
        },
        Variant {
            name: "Extra",
            value: Dup::B,
        },
    ];

    fn to_repr(self) -> u8 {
        self as u8
    }

    fn from_repr(repr: u8) -> Option<Self> {
        match repr {
            1 => Some(Dup::A),
            2 => Some(Dup::B),
            _ => None,
        }
    }
}
