/// Implimentation of the valuation trait for any structure which can be dereferenced to a slice of optional booleans.
use crate::structures::{atom::Atom, literal::Literal, valuation::Valuation};

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    fn literal_value(&self, literal: impl Literal) -> Option<bool> {
        match self.get(literal.atom() as usize) {
            Some(Some(value)) => Some(*value == literal.polarity()),
            _ => None,
        }
    }

    fn values(&self) -> impl Iterator<Item = Option<bool>> {
        self.iter().copied()
    }

    fn valued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().enumerate().filter_map(|(atom, value)| match value {
            None => None,
            _ => Some(atom as Atom),
        })
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().enumerate().filter_map(|(atom, value)| match value {
            None => Some(atom as Atom),
            _ => None,
        })
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
