//! Static travel reference data: destinations and smuggling stock.
//!
//! Buy prices are the foreign shop prices; sell estimates are conservative
//! Torn City market values. Loaded once as immutable tables, never
//! refreshed at runtime.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A travel destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub key: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    /// One-way flight time in minutes (standard airstrip).
    pub flight_min: u32,
}

/// An item purchasable abroad and resellable in Torn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelItem {
    pub id: u32,
    pub name: &'static str,
    pub country: &'static str,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
}

pub static COUNTRIES: [Country; 11] = [
    Country { key: "mexico", name: "Mexico", flag: "\u{1f1f2}\u{1f1fd}", flight_min: 26 },
    Country { key: "cayman", name: "Cayman Islands", flag: "\u{1f1f0}\u{1f1fe}", flight_min: 35 },
    Country { key: "canada", name: "Canada", flag: "\u{1f1e8}\u{1f1e6}", flight_min: 41 },
    Country { key: "hawaii", name: "Hawaii", flag: "\u{1f33a}", flight_min: 134 },
    Country { key: "uk", name: "United Kingdom", flag: "\u{1f1ec}\u{1f1e7}", flight_min: 159 },
    Country { key: "argentina", name: "Argentina", flag: "\u{1f1e6}\u{1f1f7}", flight_min: 167 },
    Country { key: "switzerland", name: "Switzerland", flag: "\u{1f1e8}\u{1f1ed}", flight_min: 175 },
    Country { key: "japan", name: "Japan", flag: "\u{1f1ef}\u{1f1f5}", flight_min: 225 },
    Country { key: "china", name: "China", flag: "\u{1f1e8}\u{1f1f3}", flight_min: 242 },
    Country { key: "uae", name: "UAE", flag: "\u{1f1e6}\u{1f1ea}", flight_min: 271 },
    Country { key: "south_africa", name: "South Africa", flag: "\u{1f1ff}\u{1f1e6}", flight_min: 297 },
];

pub static TRAVEL_ITEMS: [TravelItem; 21] = [
    // Plushies
    TravelItem { id: 273, name: "Camel Plushie", country: "uae", buy_price: dec!(14000), sell_price: dec!(78000) },
    TravelItem { id: 258, name: "Panda Plushie", country: "china", buy_price: dec!(400), sell_price: dec!(58000) },
    TravelItem { id: 261, name: "Nessie Plushie", country: "uk", buy_price: dec!(200), sell_price: dec!(29000) },
    TravelItem { id: 266, name: "Red Fox Plushie", country: "uk", buy_price: dec!(1000), sell_price: dec!(31000) },
    TravelItem { id: 268, name: "Lion Plushie", country: "south_africa", buy_price: dec!(400), sell_price: dec!(63000) },
    TravelItem { id: 269, name: "Monkey Plushie", country: "argentina", buy_price: dec!(400), sell_price: dec!(30000) },
    TravelItem { id: 274, name: "Chamois Plushie", country: "switzerland", buy_price: dec!(400), sell_price: dec!(8500) },
    TravelItem { id: 281, name: "Jaguar Plushie", country: "mexico", buy_price: dec!(10000), sell_price: dec!(14000) },
    TravelItem { id: 384, name: "Stingray Plushie", country: "cayman", buy_price: dec!(400), sell_price: dec!(6400) },
    TravelItem { id: 618, name: "Wolverine Plushie", country: "canada", buy_price: dec!(30), sell_price: dec!(6000) },
    // Flowers
    TravelItem { id: 260, name: "African Violet", country: "south_africa", buy_price: dec!(2000), sell_price: dec!(63000) },
    TravelItem { id: 264, name: "Banana Orchid", country: "cayman", buy_price: dec!(4000), sell_price: dec!(8800) },
    TravelItem { id: 272, name: "Ceibo Flower", country: "argentina", buy_price: dec!(500), sell_price: dec!(27000) },
    TravelItem { id: 263, name: "Cherry Blossom", country: "japan", buy_price: dec!(500), sell_price: dec!(43000) },
    TravelItem { id: 617, name: "Crocus", country: "canada", buy_price: dec!(600), sell_price: dec!(3900) },
    TravelItem { id: 282, name: "Dahlia", country: "mexico", buy_price: dec!(300), sell_price: dec!(1200) },
    TravelItem { id: 277, name: "Edelweiss", country: "switzerland", buy_price: dec!(900), sell_price: dec!(3200) },
    TravelItem { id: 271, name: "Heather", country: "uk", buy_price: dec!(5000), sell_price: dec!(33000) },
    TravelItem { id: 385, name: "Orchid", country: "hawaii", buy_price: dec!(700), sell_price: dec!(12800) },
    TravelItem { id: 276, name: "Peony", country: "china", buy_price: dec!(5000), sell_price: dec!(62000) },
    TravelItem { id: 262, name: "Tribulus Omanense", country: "uae", buy_price: dec!(6000), sell_price: dec!(66000) },
];

/// Look up a country by its key.
#[must_use]
pub fn country(key: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.key == key)
}

/// All items purchasable in the given country.
pub fn items_for(country_key: &str) -> impl Iterator<Item = &'static TravelItem> + '_ {
    TRAVEL_ITEMS.iter().filter(move |i| i.country == country_key)
}
