//! `define_port_error!`: error enums for read ports.
//!
//! Every port failure carries a single human-readable message. The macro
//! declares the enum with a `message: String` field per variant, a
//! snake_case constructor per variant accepting `impl Into<String>` and a
//! `message()` accessor.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant {
                    /// Adapter-supplied detail.
                    message: String,
                },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Build a [`" $name "::" $variant "`] error."]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                }
            )+

            /// Adapter-supplied detail without the variant prefix.
            #[must_use]
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } )|+ => message.as_str(),
                }
            }
        }
    };
}

pub(crate) use define_port_error;
