/*!
(The internal representation of) an atom (aka. a 'variable').

Broadly, atoms are things with a name to which assigning a (boolean) value (true or false) is of interset.

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

```rust
# use otter_twosat::structures::atom::Atom;
let m = 97;
let atoms = (0..m).collect::<Vec<Atom>>();

assert_eq!(atoms.len(), 97);
```

That the atoms are [0..*m*) for some *m*.

This representation allows atoms to be used as the indicies of a structure, e.g. `valuation[a]`, and in particular as the nodes of an [implication graph](crate::procedures::implication).
Unlike some solvers, there is no atom reserved for a tautology.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Each atom contributes two nodes to an implication graph, and the limit ensures every node fits in a [Node](crate::structures::graph::Node) on any supported target.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs() - 1;
