use crate::domain::{Chips, Roster};

/// Баланс банка: сколько активные игроки "должны" относительно стартового стека.
///
/// `bank = активных × starting_money − Σ(балансы активных)`.
/// Нигде не хранится самостоятельно – только пересчитывается.
pub fn bank_balance(roster: &Roster, starting_money: Chips) -> Chips {
    starting_money.times(roster.active_count()) - roster.active_balance_total()
}
