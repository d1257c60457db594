mod impls;

#[cfg(test)]
mod tests {
    use enum_meta::{EnumMeta, EnumMetaError, NOT_FOUND, enum_info};

    use super::impls::*;

    #[test]
    fn derived_variants_record_declaration_order() {
        assert_eq!(enum_meta::names::<Car>(), &["Bmw", "Chevy", "Nissan", "Mazda"]);
        assert_eq!(
            enum_meta::values::<Car>(),
            &[Car::Bmw, Car::Chevy, Car::Nissan, Car::Mazda]
        );
    }

    #[test]
    fn derived_values_follow_the_implicit_value_rule() {
        assert_eq!(Animal::Cat.to_repr(), -5);
        assert_eq!(Animal::Dog.to_repr(), -4);
        assert_eq!(Animal::Horse.to_repr(), 7);

        assert_eq!(Car::Bmw.to_repr(), -1);
        assert_eq!(Car::Chevy.to_repr(), 0);
        assert_eq!(Car::Nissan.to_repr(), 6);
        assert_eq!(Car::Mazda.to_repr(), 7);
    }

    #[test]
    fn all_implicit_values_count_from_zero() {
        assert_eq!(Color::Red.to_repr(), 0);
        assert_eq!(Color::Green.to_repr(), 1);
        assert_eq!(Color::Blue.to_repr(), 2);
    }

    #[test]
    fn from_repr_reverses_to_repr() {
        for value in enum_meta::values::<Car>() {
            assert_eq!(Car::from_repr(value.to_repr()), Some(*value));
        }

        assert_eq!(Car::from_repr(100), None);
        assert_eq!(Animal::from_repr(-6), None);
    }

    #[test]
    fn name_round_trips_through_the_registry() {
        let info = enum_info::<Animal>();

        for (name, value) in info.iter() {
            assert_eq!(info.value(name), Some(value));
            assert_eq!(value.name(), name);
        }
    }

    #[test]
    fn lookup_misses_are_not_errors() {
        assert_eq!(Animal::from_name("Camel"), None);
        assert_eq!(enum_info::<Animal>().name_of(-6), NOT_FOUND);
    }

    #[test]
    fn unsigned_reprs_are_supported() {
        assert_eq!(Flag::Last.to_repr(), 255u8);
        assert_eq!(Flag::from_repr(254), Some(Flag::First));
        assert_eq!(enum_meta::names::<Flag>(), &["First", "Last"]);
    }

    #[test]
    fn repr_conversions_are_generated() {
        assert_eq!(i32::from(Animal::Cat), -5);
        assert_eq!(Animal::try_from(7), Ok(Animal::Horse));

        assert_eq!(
            Animal::try_from(3),
            Err(EnumMetaError::ValueNotFound {
                type_name: "Animal",
                value: "3".to_string(),
            })
        );
    }

    #[test]
    fn display_and_from_str_are_generated() {
        assert_eq!(Car::Mazda.to_string(), "Mazda");
        assert_eq!("Nissan".parse(), Ok(Car::Nissan));

        assert_eq!(
            "Camel".parse::<Animal>(),
            Err(EnumMetaError::NameNotFound {
                type_name: "Animal",
                name: "Camel".to_string(),
            })
        );
    }

    #[test]
    fn single_variant_enum() {
        assert_eq!(enum_meta::names::<Only>(), &["Lonely"]);
        assert_eq!(Only::Lonely.to_repr(), 0);
        assert_eq!(Only::from_name("Lonely"), Some(Only::Lonely));
    }
}
