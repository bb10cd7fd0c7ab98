use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RulesError;

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 108;

/// One of the twelve card kinds in the game.
/// Cards carry no state of their own; two cards of the same kind are interchangeable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Card {
    /// Triples the value of the next nigiri played onto it
    Wasabi,
    /// Egg nigiri, 1 point
    EggNigiri,
    /// Salmon nigiri, 2 points
    SalmonNigiri,
    /// Squid nigiri, 3 points
    SquidNigiri,
    /// 10 points per set of 3
    Sashimi,
    /// 5 points per pair
    Tempura,
    /// Scored on an increasing table up to 5 cards
    Dumpling,
    /// Maki roll with one roll icon
    MakiRoll,
    /// Maki roll with two roll icons
    TwoMakiRoll,
    /// Maki roll with three roll icons
    ThreeMakiRoll,
    /// Kept until the end of the game and scored by majority
    Pudding,
    /// Lets a player take two cards on a later turn
    Chopsticks,
}

impl Card {
    /// Every card kind, in catalog order.
    pub const ALL: [Card; 12] = [
        Card::Wasabi,
        Card::EggNigiri,
        Card::SalmonNigiri,
        Card::SquidNigiri,
        Card::Sashimi,
        Card::Tempura,
        Card::Dumpling,
        Card::MakiRoll,
        Card::TwoMakiRoll,
        Card::ThreeMakiRoll,
        Card::Pudding,
        Card::Chopsticks,
    ];

    /// How many copies of this kind a full deck contains.
    pub const fn count(self) -> usize {
        match self {
            Card::Wasabi => 6,
            Card::EggNigiri => 5,
            Card::SalmonNigiri => 10,
            Card::SquidNigiri => 5,
            Card::Sashimi => 14,
            Card::Tempura => 14,
            Card::Dumpling => 14,
            Card::MakiRoll => 6,
            Card::TwoMakiRoll => 12,
            Card::ThreeMakiRoll => 8,
            Card::Pudding => 10,
            Card::Chopsticks => 4,
        }
    }

    pub const fn is_nigiri(self) -> bool {
        matches!(
            self,
            Card::EggNigiri | Card::SalmonNigiri | Card::SquidNigiri
        )
    }

    /// Base value of a nigiri card; 0 for everything else.
    pub const fn nigiri_value(self) -> u32 {
        match self {
            Card::SquidNigiri => 3,
            Card::SalmonNigiri => 2,
            Card::EggNigiri => 1,
            _ => 0,
        }
    }

    /// Number of roll icons on a maki card; 0 for everything else.
    pub const fn maki_value(self) -> u32 {
        match self {
            Card::MakiRoll => 1,
            Card::TwoMakiRoll => 2,
            Card::ThreeMakiRoll => 3,
            _ => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Card::Wasabi => "wasabi",
            Card::EggNigiri => "eggNigiri",
            Card::SalmonNigiri => "salmonNigiri",
            Card::SquidNigiri => "squidNigiri",
            Card::Sashimi => "sashimi",
            Card::Tempura => "tempura",
            Card::Dumpling => "dumpling",
            Card::MakiRoll => "makiRoll",
            Card::TwoMakiRoll => "twoMakiRoll",
            Card::ThreeMakiRoll => "threeMakiRoll",
            Card::Pudding => "pudding",
            Card::Chopsticks => "chopsticks",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Card {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| RulesError::UnknownCard(s.to_string()))
    }
}

/// Unshuffled deck: each kind repeated its multiplicity, in catalog order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &card in &Card::ALL {
        v.extend(std::iter::repeat(card).take(card.count()));
    }
    v
}
