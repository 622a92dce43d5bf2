use rand::Rng;
use serde::Serialize;

use crate::ids::checked_id;

pub const MARKETPLACE_SIZE: usize = 8;
pub const PLAYER_OWNER: &str = "player";
pub const CATALOG_OWNER: &str = "global";

const BASE_NAMES: &[&str] = &[
    "Cyber Punk",
    "Neon Warrior",
    "Digital Ghost",
    "Quantum Knight",
    "Pixel Hunter",
    "Chrome Samurai",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collectible {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub image_ref: String,
    pub owner: String,
    pub for_sale: bool,
    pub price: Option<u64>,
}

impl Collectible {
    /// Copy handed to the player when bought from the catalog.
    pub(crate) fn acquired_copy(&self, id: String) -> Self {
        Self {
            image_ref: self.image_ref.clone(),
            name: self.name.clone(),
            rarity: self.rarity,
            owner: PLAYER_OWNER.to_string(),
            for_sale: false,
            price: None,
            id,
        }
    }
}

fn generate<R: Rng + ?Sized>(rng: &mut R, id: String, owner: &str) -> Collectible {
    let rarity = Rarity::ALL[rng.gen_range(0..Rarity::ALL.len())];
    let base = BASE_NAMES[rng.gen_range(0..BASE_NAMES.len())];
    let serial = rng.gen_range(0..9999);
    let for_sale = owner == CATALOG_OWNER;
    let price = for_sale.then(|| rng.gen_range(20..120));
    Collectible {
        name: format!("{} #{}", base, serial),
        rarity,
        image_ref: format!("https://picsum.photos/seed/{}/200/200", id),
        owner: owner.to_string(),
        for_sale,
        price,
        id,
    }
}

/// A freshly minted, unlisted player collectible.
pub fn mint<R: Rng + ?Sized>(rng: &mut R, seq: u64) -> Collectible {
    generate(rng, checked_id("NFT", seq), PLAYER_OWNER)
}

/// Seeds the marketplace catalog once per session.
pub fn seed_catalog<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<Collectible> {
    (0..size)
        .map(|idx| generate(rng, format!("global-{}", idx), CATALOG_OWNER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn catalog_items_are_priced_and_listed() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = seed_catalog(&mut rng, MARKETPLACE_SIZE);
        assert_eq!(catalog.len(), MARKETPLACE_SIZE);
        for (idx, item) in catalog.iter().enumerate() {
            assert_eq!(item.id, format!("global-{}", idx));
            assert!(item.for_sale);
            let price = item.price.unwrap();
            assert!((20..120).contains(&price));
            assert_eq!(item.owner, CATALOG_OWNER);
        }
    }

    #[test]
    fn minted_items_are_unlisted() {
        let mut rng = StdRng::seed_from_u64(7);
        let item = mint(&mut rng, 1);
        assert_eq!(item.owner, PLAYER_OWNER);
        assert!(!item.for_sale);
        assert_eq!(item.price, None);
        assert!(item.name.contains(" #"));
    }
}
