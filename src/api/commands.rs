use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId};
use crate::engine::{Session, SessionSnapshot};
use crate::infra::clock::Clock;

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_session_view;

/// Роль участника сессии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    /// Единственный, кто может менять состояние.
    Dealer,
    /// Только смотрит на периодически обновляемый снапшот.
    Viewer,
}

/// Команда дилера.
///
/// Эти команды превращаются в операции (`LedgerOperation`),
/// которые Linera экспонирует наружу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    Rename { player_id: PlayerId, name: String },
    ToggleActive { player_id: PlayerId },
    SetStartingMoney { amount: Chips },
    SetSmallBlind { amount: Chips },
    SetBigBlind { amount: Chips },
    PlaceBet { player_id: PlayerId, amount: Chips },
    Win { player_id: PlayerId, amount: Chips },
    AddMoney { player_id: PlayerId, amount: Chips },
    Fold { player_id: PlayerId },
    Unfold { player_id: PlayerId },
    MatchBet { player_id: PlayerId },
    StartOrAdvanceRound,
    ResetGame,
    /// Поставить/снять курсор выбранного игрока.
    SelectPlayer { player_id: Option<PlayerId> },
    /// Сдвинуть курсор на следующего игрока, который ещё в раунде.
    SelectNextPlayer,
}

/// Выполнить команду от имени роли.
///
/// Зрителю отказываем до любого обращения к сессии.
pub fn execute_command<C: Clock>(
    session: &mut Session<C>,
    role: Role,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    if role != Role::Dealer {
        warn!("rejected {command:?}: viewer is not allowed to mutate state");
        return Err(ApiError::Unauthorized);
    }

    let label = format!("{command:?}");
    match apply(session, command) {
        Ok(response) => {
            debug!("applied {label}: {}", response.notice());
            Ok(response)
        }
        Err(err) => {
            warn!("rejected {label}: {err}");
            Err(err)
        }
    }
}

/// Принять чужой снапшот целиком. Только для зрителя: у дилера
/// авторитетное состояние, его не перезаписываем.
pub fn import_remote_snapshot<C: Clock>(
    session: &mut Session<C>,
    role: Role,
    snapshot: SessionSnapshot,
) -> Result<(), ApiError> {
    if role != Role::Viewer {
        return Err(ApiError::InvalidCommand(
            "дилер не принимает внешний снапшот".to_string(),
        ));
    }
    session.import_snapshot(snapshot)?;
    Ok(())
}

/// То же, но снапшот приходит в виде JSON.
pub fn import_remote_snapshot_json<C: Clock>(
    session: &mut Session<C>,
    role: Role,
    raw: &str,
) -> Result<(), ApiError> {
    let snapshot = SessionSnapshot::from_json(raw)?;
    import_remote_snapshot(session, role, snapshot)
}

fn apply<C: Clock>(session: &mut Session<C>, command: Command) -> Result<CommandResponse, ApiError> {
    let notice = match command {
        Command::Rename { player_id, name } => {
            let notice = format!("Игрок {player_id} теперь \"{name}\"");
            session.rename(player_id, name)?;
            notice
        }

        Command::ToggleActive { player_id } => {
            let active = session.toggle_active(player_id)?;
            let name = player_name(session, player_id);
            if active {
                format!("{name} снова в игре")
            } else {
                format!("{name} выбыл из игры")
            }
        }

        Command::SetStartingMoney { amount } => {
            session.set_starting_money(amount)?;
            format!("Стартовый стек: {amount}")
        }

        Command::SetSmallBlind { amount } => {
            session.set_small_blind(amount)?;
            format!("Малый блайнд: {amount}")
        }

        Command::SetBigBlind { amount } => {
            session.set_big_blind(amount)?;
            format!("Большой блайнд: {amount}")
        }

        Command::PlaceBet { player_id, amount } => {
            session.place_bet(player_id, amount)?;
            format!("{} ставит {amount}", player_name(session, player_id))
        }

        Command::Win { player_id, amount } => {
            session.win(player_id, amount)?;
            format!("{} выигрывает {amount}", player_name(session, player_id))
        }

        Command::AddMoney { player_id, amount } => {
            session.add_money(player_id, amount)?;
            format!("{} получает {amount}", player_name(session, player_id))
        }

        Command::Fold { player_id } => {
            session.fold(player_id)?;
            format!("{} сбрасывает карты", player_name(session, player_id))
        }

        Command::Unfold { player_id } => {
            let name = player_name(session, player_id);
            if !session.unfold(player_id)? {
                return Ok(CommandResponse::NoChange {
                    notice: format!("{name} и так в раунде"),
                });
            }
            format!("{name} вернулся в раунд")
        }

        Command::MatchBet { player_id } => {
            let called = session.match_bet(player_id)?;
            format!("{} уравнивает {called}", player_name(session, player_id))
        }

        Command::StartOrAdvanceRound => {
            let summary = session.start_or_advance_round()?;
            let mut notice = format!(
                "Раунд {} – раздаёт {}",
                summary.round,
                player_name(session, summary.dealer)
            );
            if let Some(d) = &summary.distribution {
                notice.push_str(&format!(
                    "; банк {} разделён на {} ({} каждому)",
                    d.pot,
                    d.recipients.len(),
                    d.share
                ));
            }
            return Ok(CommandResponse::RoundStarted {
                notice,
                summary,
                session: build_session_view(session),
            });
        }

        Command::ResetGame => {
            session.reset_game();
            format!("Сброс игры: у активных игроков по {}", session.starting_money())
        }

        Command::SelectPlayer { player_id } => {
            session.select_player(player_id)?;
            match player_id {
                Some(id) => format!("Выбран {}", player_name(session, id)),
                None => "Выбор снят".to_string(),
            }
        }

        Command::SelectNextPlayer => {
            let before = session.selected_player();
            let after = session.select_next_player();
            match after {
                Some(id) if after != before => format!("Выбран {}", player_name(session, id)),
                _ => {
                    return Ok(CommandResponse::NoChange {
                        notice: "Курсор не сдвинулся".to_string(),
                    })
                }
            }
        }
    };

    Ok(CommandResponse::Applied {
        notice,
        session: build_session_view(session),
    })
}

fn player_name<C: Clock>(session: &Session<C>, player_id: PlayerId) -> String {
    session
        .player(player_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("Player {player_id}"))
}
