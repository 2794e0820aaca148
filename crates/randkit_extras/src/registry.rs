//! Explicit primitive-value registry.
//!
//! Populating an arbitrary caller type with random values needs two pieces:
//!
//! - a [`ValueRegistry`] mapping each [`PrimitiveKind`] to a generator closure
//! - a [`Randomise`] implementation on the caller's type that names each
//!   field and hands it to a [`Filler`]
//!
//! The caller's implementation is the schema: nothing is discovered at run
//! time, and a field whose kind has no generator fails with
//! [`ExtrasError::UnregisteredKind`] instead of being skipped.
//!
//! ```rust
//! use randkit_core::RandomGenerator;
//! use randkit_extras::{Filler, Randomise, Result, ValueRegistry};
//!
//! #[derive(Default)]
//! struct Player {
//!     name: String,
//!     level: i32,
//!     alive: bool,
//! }
//!
//! impl Randomise for Player {
//!     fn randomise(&mut self, filler: &mut Filler<'_>) -> Result<()> {
//!         filler.fill("name", &mut self.name)?;
//!         filler.fill("level", &mut self.level)?;
//!         filler.fill("alive", &mut self.alive)
//!     }
//! }
//!
//! let registry = ValueRegistry::default();
//! let mut rng = RandomGenerator::seeded(4);
//! let player: Player = registry.populate(&mut rng).unwrap();
//! assert_eq!(player.name.len(), 10);
//! ```

use chrono::NaiveDateTime;
use rand::RngCore;
use randkit_core::RandomGenerator;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace};

use crate::error::{ExtrasError, Result};
use crate::{text, time};

/// Length of strings produced by the default `String` generator.
pub const DEFAULT_STRING_LEN: usize = 10;

/// Largest byte buffer produced by the default `Bytes` generator.
pub const DEFAULT_BYTES_MAX: i32 = 10;

/// Tag for each primitive type the registry can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    /// `bool`
    Bool,
    /// `u8`
    Byte,
    /// `Vec<u8>`
    Bytes,
    /// `char`
    Char,
    /// `i16`
    Short,
    /// `i32`
    Int,
    /// `u32`
    UInt,
    /// `i64`
    Long,
    /// `u64`
    ULong,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// `String`
    String,
    /// `chrono::NaiveDateTime`
    DateTime,
}

impl PrimitiveKind {
    /// Every kind, in declaration order.
    pub const ALL: [PrimitiveKind; 13] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Byte,
        PrimitiveKind::Bytes,
        PrimitiveKind::Char,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::UInt,
        PrimitiveKind::Long,
        PrimitiveKind::ULong,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::String,
        PrimitiveKind::DateTime,
    ];

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Bytes => "bytes",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::UInt => "uint",
            PrimitiveKind::Long => "long",
            PrimitiveKind::ULong => "ulong",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::String => "string",
            PrimitiveKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated value, tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum RandomValue {
    Bool(bool),
    Byte(u8),
    Bytes(Vec<u8>),
    Char(char),
    Short(i16),
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    Float(f32),
    Double(f64),
    String(String),
    DateTime(NaiveDateTime),
}

impl RandomValue {
    /// Kind of the carried value.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            RandomValue::Bool(_) => PrimitiveKind::Bool,
            RandomValue::Byte(_) => PrimitiveKind::Byte,
            RandomValue::Bytes(_) => PrimitiveKind::Bytes,
            RandomValue::Char(_) => PrimitiveKind::Char,
            RandomValue::Short(_) => PrimitiveKind::Short,
            RandomValue::Int(_) => PrimitiveKind::Int,
            RandomValue::UInt(_) => PrimitiveKind::UInt,
            RandomValue::Long(_) => PrimitiveKind::Long,
            RandomValue::ULong(_) => PrimitiveKind::ULong,
            RandomValue::Float(_) => PrimitiveKind::Float,
            RandomValue::Double(_) => PrimitiveKind::Double,
            RandomValue::String(_) => PrimitiveKind::String,
            RandomValue::DateTime(_) => PrimitiveKind::DateTime,
        }
    }
}

/// A Rust type that a registry kind can populate.
pub trait Primitive: Sized {
    /// Registry kind producing values of this type.
    const KIND: PrimitiveKind;

    /// Unwraps a value of the matching kind, handing back any other.
    fn from_value(value: RandomValue) -> std::result::Result<Self, RandomValue>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const KIND: PrimitiveKind = PrimitiveKind::$variant;

                fn from_value(value: RandomValue) -> std::result::Result<Self, RandomValue> {
                    match value {
                        RandomValue::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    u8 => Byte,
    Vec<u8> => Bytes,
    char => Char,
    i16 => Short,
    i32 => Int,
    u32 => UInt,
    i64 => Long,
    u64 => ULong,
    f32 => Float,
    f64 => Double,
    String => String,
    NaiveDateTime => DateTime,
}

/// Generator closure stored in a [`ValueRegistry`].
pub type GeneratorFn = Box<dyn Fn(&mut RandomGenerator) -> Result<RandomValue> + Send + Sync>;

/// Mapping from primitive kinds to generator closures.
///
/// [`ValueRegistry::default`] registers a generator for every kind;
/// [`ValueRegistry::empty`] starts blank. Registering a kind again replaces
/// its generator.
pub struct ValueRegistry {
    generators: BTreeMap<PrimitiveKind, GeneratorFn>,
}

impl fmt::Debug for ValueRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueRegistry")
            .field("kinds", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for ValueRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(PrimitiveKind::Bool, |rng| Ok(RandomValue::Bool(rng.next_bool())))
            .register(PrimitiveKind::Byte, |rng| Ok(RandomValue::Byte(rng.byte())))
            .register(PrimitiveKind::Bytes, |rng| {
                let count = rng.int_inclusive(1, DEFAULT_BYTES_MAX)?;
                Ok(RandomValue::Bytes(rng.byte_array(count as usize)?))
            })
            .register(PrimitiveKind::Char, |rng| Ok(RandomValue::Char(rng.char())))
            .register(PrimitiveKind::Short, |rng| Ok(RandomValue::Short(rng.short())))
            .register(PrimitiveKind::Int, |rng| Ok(RandomValue::Int(rng.int())))
            .register(PrimitiveKind::UInt, |rng| Ok(RandomValue::UInt(rng.next_u32())))
            .register(PrimitiveKind::Long, |rng| Ok(RandomValue::Long(rng.long())))
            .register(PrimitiveKind::ULong, |rng| Ok(RandomValue::ULong(rng.ulong())))
            .register(PrimitiveKind::Float, |rng| Ok(RandomValue::Float(rng.float())))
            .register(PrimitiveKind::Double, |rng| Ok(RandomValue::Double(rng.double())))
            .register(PrimitiveKind::String, |rng| {
                Ok(RandomValue::String(text::string(rng, DEFAULT_STRING_LEN)))
            })
            .register(PrimitiveKind::DateTime, |rng| {
                Ok(RandomValue::DateTime(time::date_time(rng)?))
            });
        registry
    }
}

impl ValueRegistry {
    /// Registry with no generators.
    pub fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Registers (or replaces) the generator for `kind`.
    pub fn register<F>(&mut self, kind: PrimitiveKind, generator: F) -> &mut Self
    where
        F: Fn(&mut RandomGenerator) -> Result<RandomValue> + Send + Sync + 'static,
    {
        self.generators.insert(kind, Box::new(generator));
        self
    }

    /// Removes the generator for `kind`. Returns whether one was registered.
    pub fn unregister(&mut self, kind: PrimitiveKind) -> bool {
        self.generators.remove(&kind).is_some()
    }

    /// Whether `kind` has a generator.
    pub fn contains(&self, kind: PrimitiveKind) -> bool {
        self.generators.contains_key(&kind)
    }

    /// Registered kinds in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = PrimitiveKind> + '_ {
        self.generators.keys().copied()
    }

    /// Draws one value of `kind`.
    ///
    /// # Errors
    ///
    /// - [`ExtrasError::UnregisteredKind`] when `kind` has no generator
    /// - whatever the generator itself reports
    pub fn generate(&self, kind: PrimitiveKind, rng: &mut RandomGenerator) -> Result<RandomValue> {
        let generator = self
            .generators
            .get(&kind)
            .ok_or(ExtrasError::UnregisteredKind(kind))?;
        generator(rng)
    }

    /// Draws one value and unwraps it as `T`.
    ///
    /// # Errors
    ///
    /// As [`ValueRegistry::generate`], plus [`ExtrasError::TypeMismatch`]
    /// when the registered generator returns another kind.
    pub fn value<T: Primitive>(&self, rng: &mut RandomGenerator) -> Result<T> {
        let value = self.generate(T::KIND, rng)?;
        T::from_value(value).map_err(|other| ExtrasError::TypeMismatch {
            field: std::any::type_name::<T>().to_string(),
            expected: T::KIND,
            found: other.kind(),
        })
    }

    /// Randomises every field `target` hands to its [`Filler`].
    pub fn randomise<T: Randomise + ?Sized>(
        &self,
        target: &mut T,
        rng: &mut RandomGenerator,
    ) -> Result<()> {
        let mut filler = Filler {
            registry: self,
            rng,
            filled: 0,
        };
        target.randomise(&mut filler)?;
        debug!(
            value_type = std::any::type_name::<T>(),
            fields = filler.filled,
            "randomised value"
        );
        Ok(())
    }

    /// Builds a default `T` and randomises it.
    pub fn populate<T: Randomise + Default>(&self, rng: &mut RandomGenerator) -> Result<T> {
        let mut target = T::default();
        self.randomise(&mut target, rng)?;
        Ok(target)
    }
}

/// Field visitor handed to [`Randomise::randomise`].
pub struct Filler<'a> {
    registry: &'a ValueRegistry,
    rng: &'a mut RandomGenerator,
    filled: usize,
}

impl Filler<'_> {
    /// Overwrites `slot` with a fresh value of its kind.
    ///
    /// # Errors
    ///
    /// - [`ExtrasError::UnregisteredKind`] when the slot's kind has no generator
    /// - [`ExtrasError::TypeMismatch`] when the generator returns another kind
    pub fn fill<T: Primitive>(&mut self, field: &str, slot: &mut T) -> Result<()> {
        let value = self.registry.generate(T::KIND, self.rng)?;
        *slot = T::from_value(value).map_err(|other| ExtrasError::TypeMismatch {
            field: field.to_string(),
            expected: T::KIND,
            found: other.kind(),
        })?;
        self.filled += 1;
        trace!(field, kind = T::KIND.as_str(), "filled field");
        Ok(())
    }

    /// Fills an optional slot: `Some` with a fresh value or `None`, evenly.
    pub fn fill_option<T: Primitive>(&mut self, field: &str, slot: &mut Option<T>) -> Result<()> {
        if self.rng.next_bool() {
            let value = self.registry.generate(T::KIND, self.rng)?;
            let value = T::from_value(value).map_err(|other| ExtrasError::TypeMismatch {
                field: field.to_string(),
                expected: T::KIND,
                found: other.kind(),
            })?;
            *slot = Some(value);
        } else {
            *slot = None;
        }
        self.filled += 1;
        Ok(())
    }

    /// The generator, for fields outside the registry's kinds.
    pub fn rng(&mut self) -> &mut RandomGenerator {
        &mut *self.rng
    }

    /// Fields filled so far.
    pub fn filled(&self) -> usize {
        self.filled
    }
}

/// A type whose fields can be randomised through a [`Filler`].
///
/// Implementations list the fields to populate; nested types forward the
/// same filler to their own implementation.
pub trait Randomise {
    /// Fills the fields of `self`.
    fn randomise(&mut self, filler: &mut Filler<'_>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Address {
        street: String,
        number: u32,
    }

    impl Randomise for Address {
        fn randomise(&mut self, filler: &mut Filler<'_>) -> Result<()> {
            filler.fill("street", &mut self.street)?;
            filler.fill("number", &mut self.number)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Customer {
        id: i64,
        score: f64,
        initial: char,
        vip: bool,
        joined: Option<NaiveDateTime>,
        avatar: Vec<u8>,
        address: Address,
        visits: usize,
    }

    impl Randomise for Customer {
        fn randomise(&mut self, filler: &mut Filler<'_>) -> Result<()> {
            filler.fill("id", &mut self.id)?;
            filler.fill("score", &mut self.score)?;
            filler.fill("initial", &mut self.initial)?;
            filler.fill("vip", &mut self.vip)?;
            filler.fill_option("joined", &mut self.joined)?;
            filler.fill("avatar", &mut self.avatar)?;
            self.address.randomise(filler)?;
            self.visits = filler.rng().int_range(0, 100)? as usize;
            Ok(())
        }
    }

    #[test]
    fn test_default_registry_covers_every_kind() {
        let registry = ValueRegistry::default();
        let mut rng = RandomGenerator::seeded(1);
        assert_eq!(registry.kinds().collect::<Vec<_>>(), PrimitiveKind::ALL.to_vec());
        for kind in PrimitiveKind::ALL {
            let value = registry.generate(kind, &mut rng).unwrap();
            assert_eq!(value.kind(), kind);
        }
    }

    #[test]
    fn test_populate_nested_struct() {
        let registry = ValueRegistry::default();
        let mut rng = RandomGenerator::seeded(2);
        let customer: Customer = registry.populate(&mut rng).unwrap();
        assert_eq!(customer.address.street.len(), DEFAULT_STRING_LEN);
        assert!((1..=DEFAULT_BYTES_MAX as usize).contains(&customer.avatar.len()));
        assert!(customer.visits < 100);
        assert!((0.0..1.0).contains(&customer.score));
    }

    #[test]
    fn test_populate_is_reproducible() {
        let registry = ValueRegistry::default();
        let a: Customer = registry.populate(&mut RandomGenerator::seeded(3)).unwrap();
        let b: Customer = registry.populate(&mut RandomGenerator::seeded(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unregistered_kind_fails() {
        let mut registry = ValueRegistry::default();
        assert!(registry.unregister(PrimitiveKind::UInt));
        assert!(!registry.unregister(PrimitiveKind::UInt));

        let mut rng = RandomGenerator::seeded(4);
        let err = registry.populate::<Customer>(&mut rng).unwrap_err();
        assert_eq!(err, ExtrasError::UnregisteredKind(PrimitiveKind::UInt));
    }

    #[test]
    fn test_custom_generator_replaces_default() {
        let mut registry = ValueRegistry::default();
        registry.register(PrimitiveKind::String, |_| Ok(RandomValue::String("fixed".into())));
        let mut rng = RandomGenerator::seeded(5);
        let address: Address = registry.populate(&mut rng).unwrap();
        assert_eq!(address.street, "fixed");
    }

    #[test]
    fn test_wrong_kind_is_reported() {
        let mut registry = ValueRegistry::empty();
        registry.register(PrimitiveKind::String, |rng| Ok(RandomValue::Int(rng.int())));
        let mut rng = RandomGenerator::seeded(6);

        let mut street = String::new();
        let result = registry.randomise(&mut StreetOnly(&mut street), &mut rng);
        assert_eq!(
            result,
            Err(ExtrasError::TypeMismatch {
                field: "street".into(),
                expected: PrimitiveKind::String,
                found: PrimitiveKind::Int,
            })
        );
        assert!(registry.value::<String>(&mut rng).is_err());
    }

    struct StreetOnly<'a>(&'a mut String);

    impl Randomise for StreetOnly<'_> {
        fn randomise(&mut self, filler: &mut Filler<'_>) -> Result<()> {
            filler.fill("street", self.0)
        }
    }

    #[test]
    fn test_value_shorthand() {
        let registry = ValueRegistry::default();
        let mut rng = RandomGenerator::seeded(7);
        let flag: bool = registry.value(&mut rng).unwrap();
        let _ = flag;
        let stamp: NaiveDateTime = registry.value(&mut rng).unwrap();
        assert!(stamp >= NaiveDateTime::MIN);
    }
}
