//! Typed atom kinds resolved once from a level's symbol table.

use super::LevelError;

/// Index into a molecule's kind table.
///
/// Several atoms on the field may share one kind (two hydrogens of a water
/// molecule are interchangeable), so this is a label and never an identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomKindId(pub u16);

impl AtomKindId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Chemical element (or connector piece) drawn for an atom.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    Hydrogen,
    Carbon,
    Oxygen,
    Nitrogen,
    Sulfur,
    Fluorine,
    Chlorine,
    Bromine,
    Phosphorus,
    Iodine,
    Crystal,
    HorizontalConnector,
    SlashConnector,
    VerticalConnector,
    BackslashConnector,
}

impl Element {
    /// Short label used by text renderers.
    pub const fn symbol(self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Carbon => "C",
            Element::Oxygen => "O",
            Element::Nitrogen => "N",
            Element::Sulfur => "S",
            Element::Fluorine => "F",
            Element::Chlorine => "Cl",
            Element::Bromine => "Br",
            Element::Phosphorus => "P",
            Element::Iodine => "I",
            Element::Crystal => "o",
            Element::HorizontalConnector => "-",
            Element::SlashConnector => "/",
            Element::VerticalConnector => "|",
            Element::BackslashConnector => "\\",
        }
    }

    pub const fn is_connector(self) -> bool {
        matches!(
            self,
            Element::HorizontalConnector
                | Element::SlashConnector
                | Element::VerticalConnector
                | Element::BackslashConnector
        )
    }
}

/// Number of electron pairs a bond stub represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BondOrder {
    Single,
    Double,
    Triple,
}

/// Heading of a bond stub, clockwise from the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Heading {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

/// A bond stub drawn on an atom. Purely visual; the win check never looks
/// at bonds because matching kinds implies matching bonds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bond {
    order: BondOrder,
    heading: Heading,
}

impl Bond {
    /// Decodes a single-character bond code.
    ///
    /// `a`..`h` are single bonds clockwise from the top, `A`..`D` double and
    /// `E`..`H` triple bonds toward top, right, bottom and left.
    pub const fn from_code(code: char) -> Option<Self> {
        use BondOrder::*;
        use Heading::*;

        let (order, heading) = match code {
            'a' => (Single, Top),
            'b' => (Single, TopRight),
            'c' => (Single, Right),
            'd' => (Single, BottomRight),
            'e' => (Single, Bottom),
            'f' => (Single, BottomLeft),
            'g' => (Single, Left),
            'h' => (Single, TopLeft),
            'A' => (Double, Top),
            'B' => (Double, Right),
            'C' => (Double, Bottom),
            'D' => (Double, Left),
            'E' => (Triple, Top),
            'F' => (Triple, Right),
            'G' => (Triple, Bottom),
            'H' => (Triple, Left),
            _ => return None,
        };
        Some(Self { order, heading })
    }

    pub const fn order(self) -> BondOrder {
        self.order
    }

    pub const fn heading(self) -> Heading {
        self.heading
    }
}

/// Resolved description of one atom kind of a molecule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomKind {
    /// Character that denotes this kind in field and molecule rows.
    pub symbol: char,
    pub element: Element,
    pub bonds: Vec<Bond>,
}

impl AtomKind {
    pub fn new(symbol: char, element: Element, bonds: Vec<Bond>) -> Self {
        Self {
            symbol,
            element,
            bonds,
        }
    }

    /// Builds a kind from its bond code string, rejecting unknown codes.
    pub fn parse(symbol: char, element: Element, bond_codes: &str) -> Result<Self, LevelError> {
        let bonds = bond_codes
            .chars()
            .map(|code| Bond::from_code(code).ok_or(LevelError::UnknownBondCode { symbol, code }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(symbol, element, bonds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bond_codes() {
        let kind = AtomKind::parse('a', Element::Carbon, "aEg").unwrap();
        assert_eq!(kind.bonds.len(), 3);
        assert_eq!(kind.bonds[0].heading(), Heading::Top);
        assert_eq!(kind.bonds[1].order(), BondOrder::Triple);
        assert_eq!(kind.bonds[2].heading(), Heading::Left);
    }

    #[test]
    fn rejects_unknown_bond_code() {
        let err = AtomKind::parse('x', Element::Oxygen, "cz").unwrap_err();
        assert_eq!(
            err,
            LevelError::UnknownBondCode {
                symbol: 'x',
                code: 'z'
            }
        );
    }

    #[test]
    fn element_names_parse() {
        assert_eq!("chlorine".parse::<Element>().unwrap(), Element::Chlorine);
        assert!(Element::SlashConnector.is_connector());
        assert_eq!(Element::Bromine.symbol(), "Br");
    }
}
