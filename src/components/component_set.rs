use crate::components::{Component, ComponentId, ComponentType};
use crate::data_structures::BitField;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::any::TypeId;
use std::sync::Arc;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

lazy_static! {
	static ref EMPTY_BITFIELD: Arc<BitField> = Arc::new(BitField::new());
	static ref TYPE_TO_BITFIELD: Mutex<HashMap<TypeId, Arc<BitField>, Hasher>> =
		Mutex::new(HashMap::default());
	static ref VEC_TO_BITFIELD: Mutex<HashMap<Vec<ComponentId>, Arc<BitField>>> =
		Mutex::new(HashMap::default());
}

/// A compile-time set of [Component] types, implemented for `()` and tuples of up to 12 components.
///
/// Used to build [filters](crate::systems::Filter) without listing ids by hand.
pub trait ComponentSet: 'static {
	/// The [component types](ComponentType) in declaration order, repeats included.
	fn component_types() -> Vec<ComponentType>;

	/// The bitfield with one bit set per [ComponentId] in the set.
	/// Sets with the same members share a single allocation regardless of declaration order.
	fn get_bitfield() -> Arc<BitField>;
}

impl ComponentSet for () {
	fn component_types() -> Vec<ComponentType> {
		Vec::new()
	}

	fn get_bitfield() -> Arc<BitField> {
		EMPTY_BITFIELD.clone()
	}
}

macro_rules! impl_component_set {
    ($($t: ident),*) => {
        impl <$($t: Component),*> ComponentSet for ($($t),*,) {
            fn component_types() -> Vec<ComponentType> {
                vec![$(ComponentType::of::<$t>()),*]
            }

            fn get_bitfield() -> Arc<BitField> {
                let key = TypeId::of::<Self>();
                let mut ttb = TYPE_TO_BITFIELD.lock();
                if let Some(bitfield) = ttb.get(&key) {
                    return bitfield.clone()
                }

                let mut components = vec![$(<$t>::component_id()),*];
                components.sort();
                components.dedup();

                let mut vtb = VEC_TO_BITFIELD.lock();
                if let Some(bitfield) = vtb.get(&components) {
                    ttb.insert(key, bitfield.clone());
                    return bitfield.clone();
                }

                let bitfield = Arc::new(BitField::from(components.as_slice()));
                vtb.insert(components, bitfield.clone());
                ttb.insert(key, bitfield.clone());
                bitfield
            }
        }
    };
}

impl_component_set!(T0);
impl_component_set!(T0, T1);
impl_component_set!(T0, T1, T2);
impl_component_set!(T0, T1, T2, T3);
impl_component_set!(T0, T1, T2, T3, T4);
impl_component_set!(T0, T1, T2, T3, T4, T5);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
