/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation as a vector of optional booleans, where each index of the vector is interpreted as an atom, though most interaction is through the valuation trait.

 In other words, the canonical representation of a valuation 𝐯 is a vector *v* whose length is the number of atoms in the formula such that:
 -  *v*\[a\] = Some(true) *if any only if* 𝐯(a) = true.
 -  *v*\[a\] = Some(false) *if any only if* 𝐯(a) = false.
 -  *v*\[a\] = None *if any only if* 𝐯(a) is undefined.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use otter_twosat::structures::valuation::Valuation;
# use otter_twosat::structures::literal::{CLiteral, Literal};
let valuation = vec![Some(true), None, Some(false), None];

assert_eq!(valuation.value_of(1), Some(None));
assert_eq!(valuation.value_of(4), None);
assert_eq!(valuation.unvalued_atoms().count(), 2);

assert_eq!(valuation.literal_value(CLiteral::new(2, false)), Some(true));
```

During a [solve](crate::procedures::solve) a valuation is built one atom at a time, as atoms are reached when scanning the components of an implication graph.
And, on completion every atom has some value.
*/

mod slice_impl;

use super::{atom::Atom, literal::Literal};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of a atom under the valuation, or otherwise nothing.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// The value of a literal under the valuation, if the atom of the literal has some value.
    ///
    /// That is, `Some(true)` if the valuation makes the literal true, `Some(false)` if the valuation makes the literal false.
    fn literal_value(&self, literal: impl Literal) -> Option<bool>;

    /// An iterator over the values of a atoms in the valuation, in strict, contiguous, atom order.
    fn values(&self) -> impl Iterator<Item = Option<bool>>;

    /// An iterator through atoms which have some value.
    fn valued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all the atoms in the valuation.
    fn atom_count(&self) -> usize;
}
