/// Promotions shown alongside the menu. Fixed for the lifetime of the process.
pub const SEASONAL_SPECIALS: [&str; 5] = [
    "Pumpkin Spice Pizza",
    "Holiday Turkey Pizza",
    "20% Off on Commercial Credit Cards",
    "Buy 1 Thin Crust Pizza and get 1 Free",
    "25% off on Sundays for Large Pan Pizzas",
];

pub fn seasonal_specials() -> &'static [&'static str] {
    &SEASONAL_SPECIALS
}
