// Declarative generators for the catalog.
//
// xdr_enum!        discriminant enums (`i32` on the wire)
// result_code!     result-code enums with a success code and messages
// xdr_union!       discriminated unions
// impl_xdr_result! XdrResult for unions keyed by a result code
// xdr_struct!      operation parameter builders
// impl_validate!   no-op Validate for plain data

macro_rules! impl_validate {
    ($($t:ty),* $(,)?) => {
        $( impl $crate::codec::Validate for $t {} )*
    };
}

macro_rules! xdr_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident = $code:literal => $wire:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $( $variant = $code, )*
        }

        impl $crate::union::XdrEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$( Self::$variant ),*];

            fn code(self) -> i32 {
                self as i32
            }

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::union::XdrEnum::name(*self))
            }
        }

        impl ::std::convert::TryFrom<i32> for $name {
            type Error = $crate::Error;

            fn try_from(code: i32) -> $crate::Result<Self> {
                <Self as $crate::union::XdrEnum>::try_from_code(code)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_i32(*self as i32)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                struct CodeVisitor;

                impl<'de> ::serde::de::Visitor<'de> for CodeVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(stringify!($name))
                    }

                    fn visit_i32<E: ::serde::de::Error>(
                        self,
                        v: i32,
                    ) -> ::std::result::Result<$name, E> {
                        <$name as $crate::union::XdrEnum>::from_code(v).ok_or_else(|| {
                            E::invalid_value(::serde::de::Unexpected::Signed(i64::from(v)), &self)
                        })
                    }

                    fn visit_i64<E: ::serde::de::Error>(
                        self,
                        v: i64,
                    ) -> ::std::result::Result<$name, E> {
                        match i32::try_from(v) {
                            Ok(code) => ::serde::de::Visitor::visit_i32(self, code),
                            Err(_) => Err(E::invalid_value(::serde::de::Unexpected::Signed(v), &self)),
                        }
                    }

                    fn visit_u64<E: ::serde::de::Error>(
                        self,
                        v: u64,
                    ) -> ::std::result::Result<$name, E> {
                        match i32::try_from(v) {
                            Ok(code) => ::serde::de::Visitor::visit_i32(self, code),
                            Err(_) => Err(E::invalid_value(::serde::de::Unexpected::Unsigned(v), &self)),
                        }
                    }
                }

                deserializer.deserialize_i32(CodeVisitor)
            }
        }

        impl $crate::codec::Validate for $name {}
    };
}

macro_rules! result_code {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($prefix:literal) {
            $success:ident = $scode:literal => $swire:literal;
            $( $variant:ident = $code:literal => $wire:literal : $msg:literal ),* $(,)?
        }
    ) => {
        xdr_enum! {
            $(#[$meta])*
            $vis enum $name {
                $success = $scode => $swire,
                $( $variant = $code => $wire, )*
            }
        }

        impl $crate::union::ResultCode for $name {
            const SUCCESS: Self = Self::$success;
            const ERROR_PREFIX: &'static str = $prefix;

            fn message(self) -> ::std::option::Option<&'static str> {
                match self {
                    Self::$success => None,
                    $( Self::$variant => Some($msg), )*
                }
            }
        }
    };
}

macro_rules! xdr_union {
    (@none $partial:ident) => {
        None
    };
    (@unsupported $partial:ident $disc:ident $name:ident) => {
        ::serde::de::Error::invalid_value(
            ::serde::de::Unexpected::Signed(i64::from($crate::union::XdrEnum::code($disc))),
            &stringify!($name),
        )
    };
    (@munch $hdr:tt [$($p:tt)*] [$($v:tt)*]
        $variant:ident ( $payload:ty ) = $code:ident $(, $($rest:tt)*)?
    ) => {
        xdr_union!(@munch $hdr [$($p)* ($variant ($payload) $code)] [$($v)*] $($($rest)*)?);
    };
    (@munch $hdr:tt [$($p:tt)*] [$($v:tt)*]
        $variant:ident = $code:ident $(, $($rest:tt)*)?
    ) => {
        xdr_union!(@munch $hdr [$($p)*] [$($v)* ($variant $code)] $($($rest)*)?);
    };
    (@munch
        ($(#[$meta:meta])* $vis:vis $name:ident $disc:ident $($partial:ident)?)
        [$( ($pv:ident ($pt:ty) $pc:ident) )*]
        [$( ($vv:ident $vc:ident) )*]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis enum $name {
            $( $pv($pt), )*
            $( $vv, )*
        }

        impl $crate::union::XdrUnion for $name {
            type Discriminant = $disc;

            fn discriminant(&self) -> $disc {
                match self {
                    $( $name::$pv(_) => $disc::$pc, )*
                    $( $name::$vv => $disc::$vc, )*
                }
            }

            fn arm(d: $disc) -> ::std::option::Option<$crate::union::Arm> {
                match d {
                    $( $disc::$pc => Some($crate::union::Arm::Payload(stringify!($pt))), )*
                    $( $disc::$vc => Some($crate::union::Arm::Void), )*
                    $( _ => xdr_union!(@none $partial), )?
                }
            }

            fn from_void(d: $disc) -> ::std::option::Option<Self> {
                match d {
                    $( $disc::$pc => None, )*
                    $( $disc::$vc => Some($name::$vv), )*
                    $( _ => xdr_union!(@none $partial), )?
                }
            }

            fn payload(&self) -> ::std::option::Option<&dyn ::std::any::Any> {
                match self {
                    $( $name::$pv(payload) => Some(payload as &dyn ::std::any::Any), )*
                    $( $name::$vv => None, )*
                }
            }
        }

        impl $crate::codec::Validate for $name {
            fn validate(&self) -> $crate::Result<()> {
                match self {
                    $( $name::$pv(payload) => $crate::codec::Validate::validate(payload), )*
                    $( $name::$vv => Ok(()), )*
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                use ::serde::ser::SerializeTuple as _;
                match self {
                    $(
                        $name::$pv(payload) => {
                            let mut tuple = serializer.serialize_tuple(2)?;
                            tuple.serialize_element(&$disc::$pc)?;
                            tuple.serialize_element(payload)?;
                            tuple.end()
                        }
                    )*
                    $(
                        $name::$vv => {
                            let mut tuple = serializer.serialize_tuple(1)?;
                            tuple.serialize_element(&$disc::$vc)?;
                            tuple.end()
                        }
                    )*
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                struct ArmVisitor;

                impl<'de> ::serde::de::Visitor<'de> for ArmVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(concat!("XDR union ", stringify!($name)))
                    }

                    fn visit_seq<A: ::serde::de::SeqAccess<'de>>(
                        self,
                        mut seq: A,
                    ) -> ::std::result::Result<$name, A::Error> {
                        let disc: $disc = match seq.next_element()? {
                            Some(disc) => disc,
                            None => {
                                return Err(<A::Error as ::serde::de::Error>::invalid_length(0, &self));
                            }
                        };
                        match disc {
                            $(
                                $disc::$pc => match seq.next_element::<$pt>()? {
                                    Some(payload) => Ok($name::$pv(payload)),
                                    None => Err(<A::Error as ::serde::de::Error>::invalid_length(1, &self)),
                                },
                            )*
                            $( $disc::$vc => Ok($name::$vv), )*
                            $( _ => Err(xdr_union!(@unsupported $partial disc $name)), )?
                        }
                    }
                }

                deserializer.deserialize_tuple(2, ArmVisitor)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $disc:ident $(, $partial:ident)? {
            $($body:tt)*
        }
    ) => {
        xdr_union!(@munch ($(#[$meta])* $vis $name $disc $($partial)?) [] [] $($body)*);
    };
}

macro_rules! impl_xdr_result {
    ($($name:ident),* $(,)?) => {
        $( impl $crate::union::XdrResult for $name {} )*
    };
}

macro_rules! xdr_struct {
    (@required required) => {
        true
    };
    (@required optional) => {
        false
    };
    (@required default) => {
        false
    };
    // The XDR serializer fails on the marker itself with a typed
    // `MissingField`; other formats get the same error as a message.
    (@ser required $state:ident $name:ident $field:ident, $value:expr) => {
        match $value {
            Some(value) => $state.serialize_field(stringify!($field), value)?,
            None => {
                let unset = $crate::ser::UnsetField {
                    ty: stringify!($name),
                    field: stringify!($field),
                };
                $state.serialize_field(stringify!($field), &unset)?;
                return Err(::serde::ser::Error::custom($crate::Error::MissingField {
                    ty: unset.ty,
                    field: unset.field,
                }));
            }
        }
    };
    (@ser optional $state:ident $name:ident $field:ident, $value:expr) => {
        $state.serialize_field(stringify!($field), $value)?
    };
    (@ser default $state:ident $name:ident $field:ident, $value:expr) => {
        $state.serialize_field(stringify!($field), &$value.clone().unwrap_or_default())?
    };
    (@de required $seq:ident $ty:ty) => {
        $seq.next_element::<$ty>()?.map(Some)
    };
    (@de optional $seq:ident $ty:ty) => {
        $seq.next_element::<::std::option::Option<$ty>>()?
    };
    // A default value on the wire reads back as unset.
    (@de default $seq:ident $ty:ty) => {
        $seq.next_element::<$ty>()?
            .map(|value| xdr_struct!(@store default $ty, value))
    };
    // Default fields keep their zero value as unset, so each wire value has
    // one representation.
    (@store default $ty:ty, $value:expr) => {{
        let value: $ty = $value;
        (value != <$ty as ::std::default::Default>::default()).then_some(value)
    }};
    (@store $kind:ident $ty:ty, $value:expr) => {
        Some($value)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $kind:ident $field:ident : $ty:ty => $setter:ident ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        $vis struct $name {
            $( $field: ::std::option::Option<$ty>, )*
        }

        impl $name {
            const FIELDS: &'static [&'static str] = &[$( stringify!($field) ),*];

            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, value: impl $crate::types::Coerce<$ty>) -> $crate::Result<Self> {
                    self.$field = xdr_struct!(@store $kind $ty, $crate::types::Coerce::coerce(value)?);
                    Ok(self)
                }

                pub fn $field(&self) -> ::std::option::Option<&$ty> {
                    self.$field.as_ref()
                }
            )*

            /// True when every required field is set.
            pub fn is_ready(&self) -> bool {
                $crate::codec::Validate::validate(self).is_ok()
            }
        }

        impl $crate::codec::Validate for $name {
            fn validate(&self) -> $crate::Result<()> {
                $(
                    match &self.$field {
                        Some(value) => $crate::codec::Validate::validate(value)?,
                        None if xdr_struct!(@required $kind) => {
                            return Err($crate::Error::MissingField {
                                ty: stringify!($name),
                                field: stringify!($field),
                            });
                        }
                        None => {}
                    }
                )*
                Ok(())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                use ::serde::ser::SerializeStruct as _;
                let mut state = serializer.serialize_struct(stringify!($name), Self::FIELDS.len())?;
                $( xdr_struct!(@ser $kind state $name $field, &self.$field); )*
                state.end()
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                struct FieldsVisitor;

                impl<'de> ::serde::de::Visitor<'de> for FieldsVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(concat!("struct ", stringify!($name)))
                    }

                    // The count after the last field is never read.
                    #[allow(unused_assignments)]
                    fn visit_seq<A: ::serde::de::SeqAccess<'de>>(
                        self,
                        mut seq: A,
                    ) -> ::std::result::Result<$name, A::Error> {
                        let mut index = 0usize;
                        $(
                            let $field = match xdr_struct!(@de $kind seq $ty) {
                                Some(value) => value,
                                None => {
                                    return Err(<A::Error as ::serde::de::Error>::invalid_length(index, &self));
                                }
                            };
                            index += 1;
                        )*
                        Ok($name { $( $field, )* })
                    }
                }

                deserializer.deserialize_struct(stringify!($name), $name::FIELDS, FieldsVisitor)
            }
        }
    };
}
