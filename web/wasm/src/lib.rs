use cribcount::{
    Card, GameOptions, Rank, ScoreBreakdown, ScoreItem, Suit, calculate_hand_score, skunk_status,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Counts a hand or crib given as `{ rank, suit }` objects.
#[wasm_bindgen]
pub fn score_hand(hand: JsValue, starter: JsValue, is_crib: bool) -> Result<JsValue, JsValue> {
    let hand: Vec<JsCard> = serde_wasm_bindgen::from_value(hand).map_err(js_err)?;
    let hand = hand
        .into_iter()
        .map(Card::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let starter = parse_optional_card(starter)?;

    let breakdown = calculate_hand_score(&hand, starter, is_crib).map_err(js_err)?;
    to_js_value(&JsBreakdown::from(breakdown))
}

/// Points the dealer pegs for the starter card.
#[wasm_bindgen]
pub fn his_heels_points(starter: JsValue) -> Result<u8, JsValue> {
    let starter: JsCard = serde_wasm_bindgen::from_value(starter).map_err(js_err)?;
    let starter = Card::try_from(starter)?;
    Ok(cribcount::his_heels_points(starter, &GameOptions::default()))
}

/// Skunk status of the losing score: `none`, `skunk` or `doubleSkunk`.
#[wasm_bindgen]
pub fn skunk_status_of(loser_score: u16) -> String {
    skunk_status(loser_score, &GameOptions::default())
        .as_str()
        .to_owned()
}

fn parse_optional_card(value: JsValue) -> Result<Option<Card>, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    let card: JsCard = serde_wasm_bindgen::from_value(value).map_err(js_err)?;
    Card::try_from(card).map(Some)
}

#[derive(Serialize, Deserialize)]
struct JsCard {
    rank: String,
    suit: String,
}

impl TryFrom<JsCard> for Card {
    type Error = JsValue;

    fn try_from(card: JsCard) -> Result<Self, Self::Error> {
        let rank = Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol() == card.rank)
            .ok_or_else(|| JsValue::from_str(&format!("invalid rank {}", card.rank)))?;
        let suit = Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == card.suit)
            .ok_or_else(|| JsValue::from_str(&format!("invalid suit {}", card.suit)))?;
        Ok(Self::new(rank, suit))
    }
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank.symbol().to_owned(),
            suit: card.suit.name().to_owned(),
        }
    }
}

#[derive(Serialize)]
struct JsBreakdown {
    items: Vec<JsItem>,
    total: u8,
}

impl From<ScoreBreakdown> for JsBreakdown {
    fn from(breakdown: ScoreBreakdown) -> Self {
        let total = breakdown.total();
        Self {
            items: breakdown.into_items().into_iter().map(JsItem::from).collect(),
            total,
        }
    }
}

#[derive(Serialize)]
struct JsItem {
    #[serde(rename = "type")]
    kind: &'static str,
    points: u8,
    cards: Vec<JsCard>,
    description: String,
}

impl From<ScoreItem> for JsItem {
    fn from(item: ScoreItem) -> Self {
        Self {
            kind: item.kind.as_str(),
            points: item.points,
            cards: item.cards.into_iter().map(JsCard::from).collect(),
            description: item.description,
        }
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
