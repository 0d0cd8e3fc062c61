// src/systems/stock_system.rs
//! Handles the single Stock-pile control (dealing to Waste, recycling Waste).

use crate::components::game_state::GameState;
use crate::logic::rules::stock_waste;
use log::{info, warn};

/// What a click on the Stock pile ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// One card was turned from Stock onto Waste.
    Drawn,
    /// The whole Waste pile was turned back into the Stock pile.
    Recycled,
    /// Stock and Waste were both empty; nothing happened.
    NoOp,
}

/// Resolves a click on the Stock pile.
///
/// One control, three outcomes: draw if the Stock has cards, recycle the
/// Waste back into the Stock if it doesn't, and do nothing if both piles are
/// empty. Draw and recycle each count as a single move.
pub fn handle_stock_click(state: &mut GameState) -> StockAction {
    if deal_one_card_from_stock(state) {
        state.move_count += 1;
        StockAction::Drawn
    } else if reset_waste_to_stock(state) {
        state.move_count += 1;
        StockAction::Recycled
    } else {
        info!("Stock and Waste are both empty; click ignored.");
        StockAction::NoOp
    }
}

/// Deals one card from the Stock pile to the Waste pile.
/// Returns true if a card was dealt, false otherwise.
pub fn deal_one_card_from_stock(state: &mut GameState) -> bool {
    if !stock_waste::can_deal_from_stock(state.stacks.stock.is_empty()) {
        return false; // Nothing to deal
    }

    match state.stacks.stock.pop() {
        Some(mut card) => {
            card.is_face_up = true; // Card dealt to Waste is face up
            info!("Dealt {:?} of {:?} from Stock to Waste.", card.rank, card.suit);
            state.stacks.waste.push(card);
            true
        }
        None => {
            warn!("Stock reported non-empty but had no top card.");
            false
        }
    }
}

/// Resets the Waste pile back to the Stock pile when the Stock is empty.
/// Returns true if the reset was performed, false otherwise.
///
/// The Waste is picked up card by card from the top (which reverses it) and
/// the rebuilt Stock is then reversed once more, so the Stock array ends up
/// holding exactly the sequence the Waste held, every card face down again.
pub fn reset_waste_to_stock(state: &mut GameState) -> bool {
    if !stock_waste::can_reset_stock_from_waste(
        state.stacks.stock.is_empty(),
        state.stacks.waste.is_empty(),
    ) {
        return false;
    }

    info!("Recycling {} cards from Waste back to Stock.", state.stacks.waste.len());

    while let Some(mut card) = state.stacks.waste.pop() {
        card.is_face_up = false;
        state.stacks.stock.push(card);
    }
    state.stacks.stock.reverse();

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit, ALL_RANKS};

    #[test]
    fn test_draw_moves_top_card_face_up() {
        let mut state = GameState::new();
        state.stacks.stock.push(Card::new(Suit::Club, Rank::Three));
        state.stacks.stock.push(Card::new(Suit::Heart, Rank::Jack));

        let action = handle_stock_click(&mut state);

        assert_eq!(action, StockAction::Drawn);
        assert_eq!(state.move_count, 1);
        assert_eq!(state.stacks.stock.len(), 1);
        // The Stock top (last element) lands on the Waste, face up.
        let waste_top = state.stacks.waste.last().unwrap();
        assert_eq!(waste_top.rank, Rank::Jack);
        assert!(waste_top.is_face_up);
    }

    #[test]
    fn test_recycle_restores_waste_sequence_face_down() {
        let mut state = GameState::new();
        // Five face-up cards in the Waste, bottom to top: A..5 of Spades.
        for &rank in ALL_RANKS.iter().take(5) {
            let mut card = Card::new(Suit::Spade, rank);
            card.is_face_up = true;
            state.stacks.waste.push(card);
        }
        let waste_before = state.stacks.waste.clone();

        let action = handle_stock_click(&mut state);

        assert_eq!(action, StockAction::Recycled);
        assert_eq!(state.move_count, 1, "a whole recycle counts as one move");
        assert!(state.stacks.waste.is_empty());
        assert_eq!(state.stacks.stock.len(), 5);
        // Double reversal: the Stock array ends up in the Waste's stored order,
        // i.e. the reverse of the Waste's top-to-bottom order.
        for (recycled, before) in state.stacks.stock.iter().zip(waste_before.iter()) {
            assert_eq!((recycled.suit, recycled.rank), (before.suit, before.rank));
            assert!(!recycled.is_face_up, "recycled cards must be face down again");
        }
    }

    #[test]
    fn test_click_with_both_piles_empty_is_noop() {
        let mut state = GameState::new();
        let before = state.clone();

        let action = handle_stock_click(&mut state);

        assert_eq!(action, StockAction::NoOp);
        assert_eq!(state, before, "a no-op click must not change anything");
    }

    #[test]
    fn test_draw_after_recycle_yields_former_waste_top() {
        let mut state = GameState::new();
        let mut nine = Card::new(Suit::Heart, Rank::Nine);
        nine.is_face_up = true;
        let mut four = Card::new(Suit::Club, Rank::Four);
        four.is_face_up = true;
        state.stacks.waste.push(nine); // bottom
        state.stacks.waste.push(four); // top

        assert_eq!(handle_stock_click(&mut state), StockAction::Recycled);
        // Stock array == former waste array, so the next draw pops its last
        // element: the card that was on top of the Waste.
        assert_eq!(handle_stock_click(&mut state), StockAction::Drawn);
        assert_eq!(state.stacks.waste.last().unwrap().rank, Rank::Four);
        assert_eq!(state.move_count, 2);
    }
}
