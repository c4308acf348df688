use crate::domain::{Chips, Player};
use crate::engine::errors::EngineError;

/// Сумма команды должна быть строго положительной.
pub fn validate_amount(amount: Chips) -> Result<(), EngineError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(EngineError::InvalidAmount(amount))
    }
}

/// Настройки (стек, блайнды) могут быть нулевыми, но не отрицательными.
pub fn validate_setting(value: Chips) -> Result<(), EngineError> {
    if value.is_negative() {
        Err(EngineError::InvalidAmount(value))
    } else {
        Ok(())
    }
}

/// Денежные действия и фолд – только для активных игроков.
pub fn validate_active(player: &Player) -> Result<(), EngineError> {
    if player.is_active {
        Ok(())
    } else {
        Err(EngineError::InactivePlayer(player.id))
    }
}

/// Ставка не может превышать баланс.
pub fn validate_bet(player: &Player, amount: Chips) -> Result<(), EngineError> {
    validate_amount(amount)?;
    if amount > player.balance {
        return Err(EngineError::InsufficientPlayerFunds {
            player_id: player.id,
            balance: player.balance,
            requested: amount,
        });
    }
    Ok(())
}

/// Проверка колла. Возвращает сумму, которую нужно доставить.
pub fn validate_call(player: &Player, highest_bet: Chips) -> Result<Chips, EngineError> {
    let to_call = player.to_call(highest_bet);
    if !to_call.is_positive() {
        return Err(EngineError::AlreadyCalled(player.id));
    }
    if player.balance < to_call {
        return Err(EngineError::InsufficientPlayerFunds {
            player_id: player.id,
            balance: player.balance,
            requested: to_call,
        });
    }
    Ok(to_call)
}

/// Банк не может выплатить больше, чем в нём есть.
pub fn validate_payout(bank: Chips, amount: Chips) -> Result<(), EngineError> {
    validate_amount(amount)?;
    if amount > bank {
        return Err(EngineError::InsufficientBankFunds {
            bank,
            requested: amount,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funded(balance: i64, bet: i64) -> Player {
        let mut p = Player::new(1, "Player 1");
        p.balance = Chips(balance);
        p.current_bet = Chips(bet);
        p
    }

    #[test]
    fn bet_of_whole_balance_is_allowed() {
        assert!(validate_bet(&funded(100, 0), Chips(100)).is_ok());
        assert!(matches!(
            validate_bet(&funded(100, 0), Chips(101)),
            Err(EngineError::InsufficientPlayerFunds { .. })
        ));
        assert_eq!(
            validate_bet(&funded(100, 0), Chips(0)),
            Err(EngineError::InvalidAmount(Chips(0)))
        );
    }

    #[test]
    fn call_requires_something_owed() {
        assert_eq!(validate_call(&funded(50, 40), Chips(40)), Err(EngineError::AlreadyCalled(1)));
        assert_eq!(validate_call(&funded(50, 10), Chips(40)), Ok(Chips(30)));
        assert!(matches!(
            validate_call(&funded(20, 10), Chips(40)),
            Err(EngineError::InsufficientPlayerFunds { requested: Chips(30), .. })
        ));
    }

    #[test]
    fn payout_is_capped_by_bank() {
        assert!(validate_payout(Chips(50), Chips(50)).is_ok());
        assert!(matches!(
            validate_payout(Chips(50), Chips(51)),
            Err(EngineError::InsufficientBankFunds { .. })
        ));
    }
}
