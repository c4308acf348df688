// src/engine/session.rs

use log::{debug, info};

use crate::domain::{
    Chips, Player, PlayerId, Roster, SessionConfig, Transaction, TransactionKind,
};
use crate::engine::bank::bank_balance;
use crate::engine::errors::EngineError;
use crate::engine::ledger::Ledger;
use crate::engine::positions::{compute_positions, SeatPositions, SeatRole};
use crate::engine::round::{PotDistribution, RoundPhase, RoundStart, RoundState};
use crate::engine::snapshot::SessionSnapshot;
use crate::engine::validation;
use crate::infra::clock::{Clock, SystemClock};
use crate::infra::ids::IdSequence;

/// Сессия учёта фишек: ростер, журнал, состояние раундов и курсор выбранного игрока.
///
/// Все методы синхронные и атомарные: либо команда применена целиком,
/// либо возвращается `EngineError` и состояние не меняется.
/// Проверка роли (дилер/зритель) делается выше, в `api`.
///
/// Баланс банка хранится только как кэш и пересчитывается целиком
/// в конце каждой мутации (`refresh_bank`).
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    config: SessionConfig,
    roster: Roster,
    ledger: Ledger,
    round: RoundState,
    selected_player: Option<PlayerId>,
    ids: IdSequence,
    bank: Chips,
    clock: C,
}

impl Session<SystemClock> {
    /// Сессия с системными часами.
    pub fn new(config: SessionConfig) -> Result<Self, EngineError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(config: SessionConfig, clock: C) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidConfig)?;

        let mut session = Self {
            roster: Roster::with_seats(config.seats),
            ledger: Ledger::new(config.ledger_capacity),
            round: RoundState::default(),
            selected_player: None,
            ids: IdSequence::new(),
            bank: Chips::ZERO,
            clock,
            config,
        };
        session.refresh_bank();
        Ok(session)
    }

    // ---------------------------------------------------------------------
    // Чтение
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.roster.get(player_id)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn round_state(&self) -> &RoundState {
        &self.round
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    pub fn bank_balance(&self) -> Chips {
        self.bank
    }

    pub fn starting_money(&self) -> Chips {
        self.config.starting_money
    }

    pub fn small_blind(&self) -> Chips {
        self.config.small_blind
    }

    pub fn big_blind(&self) -> Chips {
        self.config.big_blind
    }

    pub fn highest_bet(&self) -> Chips {
        self.round.highest_bet
    }

    pub fn selected_player(&self) -> Option<PlayerId> {
        self.selected_player
    }

    /// Дилер и блайнды для текущего порядка активных игроков.
    pub fn positions(&self) -> Option<SeatPositions> {
        compute_positions(&self.roster, self.round.dealer_position)
    }

    pub fn role_of(&self, player_id: PlayerId) -> SeatRole {
        match (self.positions(), self.roster.active_index_of(player_id)) {
            (Some(pos), Some(_)) => pos.role_of(player_id),
            _ => SeatRole::Normal,
        }
    }

    // ---------------------------------------------------------------------
    // Ростер и настройки
    // ---------------------------------------------------------------------

    pub fn rename(&mut self, player_id: PlayerId, name: impl Into<String>) -> Result<(), EngineError> {
        let player = self
            .roster
            .get_mut(player_id)
            .ok_or(EngineError::InvalidTarget(player_id))?;
        player.name = name.into();
        debug!("player {player_id} renamed to {:?}", player.name);
        Ok(())
    }

    /// Включить/выключить игрока. Возвращает новое значение флага активности.
    pub fn toggle_active(&mut self, player_id: PlayerId) -> Result<bool, EngineError> {
        let player = self
            .roster
            .get_mut(player_id)
            .ok_or(EngineError::InvalidTarget(player_id))?;
        player.toggle_active();
        let now_active = player.is_active;

        // Выключенного игрока нельзя держать под курсором.
        if !now_active && self.selected_player == Some(player_id) {
            self.selected_player = self.first_eligible();
        }

        self.refresh_bank();
        debug!("player {player_id} active = {now_active}");
        Ok(now_active)
    }

    pub fn set_starting_money(&mut self, amount: Chips) -> Result<(), EngineError> {
        validation::validate_setting(amount)?;
        self.config.starting_money = amount;
        self.refresh_bank();
        debug!("starting money set to {amount}");
        Ok(())
    }

    pub fn set_small_blind(&mut self, amount: Chips) -> Result<(), EngineError> {
        validation::validate_setting(amount)?;
        self.config.small_blind = amount;
        debug!("small blind set to {amount}");
        Ok(())
    }

    pub fn set_big_blind(&mut self, amount: Chips) -> Result<(), EngineError> {
        validation::validate_setting(amount)?;
        self.config.big_blind = amount;
        debug!("big blind set to {amount}");
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Денежные действия
    // ---------------------------------------------------------------------

    pub fn place_bet(&mut self, player_id: PlayerId, amount: Chips) -> Result<(), EngineError> {
        let player = self.active_player(player_id)?;
        validation::validate_bet(player, amount)?;

        self.apply_bet(player_id, amount, format!("Bet {amount}"));
        Ok(())
    }

    /// Уравнять максимальную ставку. Возвращает доставленную сумму.
    pub fn match_bet(&mut self, player_id: PlayerId) -> Result<Chips, EngineError> {
        let player = self.active_player(player_id)?;
        let to_call = validation::validate_call(player, self.round.highest_bet)?;

        self.apply_bet(player_id, to_call, format!("Called {to_call}"));
        Ok(to_call)
    }

    /// Выплата из банка. currentBet не трогаем.
    pub fn win(&mut self, player_id: PlayerId, amount: Chips) -> Result<(), EngineError> {
        self.active_player(player_id)?;
        validation::validate_payout(self.bank, amount)?;

        self.credit(player_id, amount);
        self.record(player_id, amount, TransactionKind::Win, format!("Won {amount}"));
        self.refresh_bank();
        Ok(())
    }

    /// Докупка/коррекция. Банком не ограничена.
    pub fn add_money(&mut self, player_id: PlayerId, amount: Chips) -> Result<(), EngineError> {
        self.active_player(player_id)?;
        validation::validate_amount(amount)?;

        self.credit(player_id, amount);
        self.record(player_id, amount, TransactionKind::Add, format!("Added {amount}"));
        self.refresh_bank();
        Ok(())
    }

    pub fn fold(&mut self, player_id: PlayerId) -> Result<(), EngineError> {
        self.active_player(player_id)?;

        if let Some(p) = self.roster.get_mut(player_id) {
            p.has_folded = true;
        }
        self.record(player_id, Chips::ZERO, TransactionKind::Fold, "Folded".to_string());
        Ok(())
    }

    /// Вернуть сфолдившего игрока в раунд.
    /// Для несфолдившего – ничего не делает и возвращает `false`.
    pub fn unfold(&mut self, player_id: PlayerId) -> Result<bool, EngineError> {
        let player = self.active_player(player_id)?;
        if !player.has_folded {
            return Ok(false);
        }

        if let Some(p) = self.roster.get_mut(player_id) {
            p.has_folded = false;
        }
        self.record(player_id, Chips::ZERO, TransactionKind::Add, "Unfolded".to_string());
        Ok(true)
    }

    // ---------------------------------------------------------------------
    // Раунды
    // ---------------------------------------------------------------------

    /// Раздать банк раунда поровну между активными несфолдившими игроками.
    ///
    /// Банк = сумма текущих ставок всех активных (включая сфолдивших).
    /// Остаток от деления сгорает. Ставки обнуляет следующий старт раунда.
    pub fn distribute_pot(&mut self) -> Option<PotDistribution> {
        let pot = self.roster.pot_total();
        let recipients: Vec<PlayerId> = self
            .roster
            .active()
            .filter(|p| p.is_in_pot())
            .map(|p| p.id)
            .collect();

        if !pot.is_positive() || recipients.is_empty() {
            return None;
        }

        let (share, burned) = pot.split(recipients.len());
        for &id in &recipients {
            self.credit(id, share);
        }
        for &id in &recipients {
            self.record(id, share, TransactionKind::Win, format!("Pot share: {share}"));
        }
        self.refresh_bank();

        info!(
            "pot {pot} split among {} players ({share} each, {burned} burned)",
            recipients.len()
        );

        Some(PotDistribution {
            pot,
            share,
            recipients,
            burned,
        })
    }

    /// Старт игры или переход к следующему раунду.
    ///
    /// Если игра уже идёт: раздаём банк, номер раунда +1, кнопка сдвигается.
    /// Блайнды всегда считаются от позиции дилера *после* сдвига.
    pub fn start_or_advance_round(&mut self) -> Result<RoundStart, EngineError> {
        let active_count = self.roster.active_count();
        if active_count == 0 {
            return Err(EngineError::DegenerateActiveSet);
        }

        let dealer_position = if self.round.started {
            (self.round.dealer_position % active_count + 1) % active_count
        } else {
            self.round.dealer_position
        };
        let positions = compute_positions(&self.roster, dealer_position)
            .ok_or(EngineError::DegenerateActiveSet)?;

        // Дальше ошибок нет – можно мутировать.
        let distribution = if self.round.started {
            let distribution = self.distribute_pot();
            self.round.advance(active_count);
            distribution
        } else {
            self.round.started = true;
            self.round.round = 1;
            None
        };
        self.round.dealer_position = positions.dealer_index;

        self.post_blinds(&positions);
        self.round.highest_bet = self.config.big_blind;
        self.refresh_bank();

        info!(
            "round {} started: dealer {}, small blind {}, big blind {}",
            self.round.round, positions.dealer, positions.small_blind, positions.big_blind
        );

        Ok(RoundStart {
            round: self.round.round,
            dealer: positions.dealer,
            small_blind: positions.small_blind,
            big_blind: positions.big_blind,
            distribution,
        })
    }

    /// Полный сброс: активным – стартовый стек, выключенным – 0, журнал пуст.
    pub fn reset_game(&mut self) {
        let starting = self.config.starting_money;
        for p in self.roster.iter_mut() {
            p.balance = if p.is_active { starting } else { Chips::ZERO };
            p.current_bet = Chips::ZERO;
            p.has_folded = false;
        }
        self.ledger.clear();
        self.round.reset();
        self.selected_player = None;
        self.refresh_bank();

        info!("game reset: active players set to {starting}");
    }

    // ---------------------------------------------------------------------
    // Курсор выбранного игрока
    // ---------------------------------------------------------------------

    pub fn select_player(&mut self, player_id: Option<PlayerId>) -> Result<(), EngineError> {
        if let Some(id) = player_id {
            if self.roster.get(id).is_none() {
                return Err(EngineError::InvalidTarget(id));
            }
        }
        self.selected_player = player_id;
        Ok(())
    }

    /// Сдвинуть курсор на следующего активного несфолдившего игрока (по кругу).
    pub fn select_next_player(&mut self) -> Option<PlayerId> {
        let eligible: Vec<PlayerId> = self
            .roster
            .active()
            .filter(|p| p.is_in_pot())
            .map(|p| p.id)
            .collect();
        if eligible.is_empty() {
            return self.selected_player;
        }

        let next = match self
            .selected_player
            .and_then(|id| eligible.iter().position(|&e| e == id))
        {
            Some(idx) => eligible[(idx + 1) % eligible.len()],
            None => eligible[0],
        };
        self.selected_player = Some(next);
        Some(next)
    }

    // ---------------------------------------------------------------------
    // Снапшоты
    // ---------------------------------------------------------------------

    pub fn export_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            players: self.roster.players().to_vec(),
            selected_player_id: self.selected_player,
            game_round: self.round.round,
            highest_bet: self.round.highest_bet,
            starting_money: self.config.starting_money,
            small_blind: self.config.small_blind,
            big_blind: self.config.big_blind,
            game_started: self.round.started,
            dealer_position: self.round.dealer_position,
        }
    }

    /// Заменить локальное состояние снапшотом целиком (режим зрителя).
    /// Журнал не трогаем – его в снапшоте нет.
    pub fn import_snapshot(&mut self, snapshot: SessionSnapshot) -> Result<(), EngineError> {
        let roster = Roster::from_players(snapshot.players);
        if let Some(dup) = roster.first_duplicate_id() {
            return Err(EngineError::InvalidSnapshot(format!(
                "повторяющийся id игрока {dup}"
            )));
        }
        if let Some(p) = roster.players().iter().find(|p| p.current_bet.is_negative()) {
            return Err(EngineError::InvalidSnapshot(format!(
                "отрицательная ставка у игрока {}",
                p.id
            )));
        }
        if snapshot.dealer_position >= roster.len().max(1) {
            return Err(EngineError::InvalidSnapshot(format!(
                "dealer_position {} вне ростера из {} мест",
                snapshot.dealer_position,
                roster.len()
            )));
        }
        for (field, value) in [
            ("starting_money", snapshot.starting_money),
            ("small_blind", snapshot.small_blind),
            ("big_blind", snapshot.big_blind),
            ("highest_bet", snapshot.highest_bet),
        ] {
            if value.is_negative() {
                return Err(EngineError::InvalidSnapshot(format!("{field} = {value}")));
            }
        }

        let selected = snapshot
            .selected_player_id
            .filter(|id| roster.get(*id).is_some());

        self.roster = roster;
        self.selected_player = selected;
        self.round = RoundState {
            started: snapshot.game_started,
            round: snapshot.game_round,
            dealer_position: snapshot.dealer_position,
            highest_bet: snapshot.highest_bet,
        };
        self.config.starting_money = snapshot.starting_money;
        self.config.small_blind = snapshot.small_blind;
        self.config.big_blind = snapshot.big_blind;
        self.refresh_bank();

        debug!(
            "snapshot imported: {} players, round {}",
            self.roster.len(),
            self.round.round
        );
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Внутреннее
    // ---------------------------------------------------------------------

    fn active_player(&self, player_id: PlayerId) -> Result<&Player, EngineError> {
        let player = self
            .roster
            .get(player_id)
            .ok_or(EngineError::InvalidTarget(player_id))?;
        validation::validate_active(player)?;
        Ok(player)
    }

    fn first_eligible(&self) -> Option<PlayerId> {
        self.roster.active().find(|p| p.is_in_pot()).map(|p| p.id)
    }

    fn apply_bet(&mut self, player_id: PlayerId, amount: Chips, description: String) {
        if let Some(p) = self.roster.get_mut(player_id) {
            p.balance -= amount;
            p.current_bet += amount;
            self.round.highest_bet = self.round.highest_bet.max(p.current_bet);
        }
        self.record(player_id, amount, TransactionKind::Bet, description);
        self.refresh_bank();
    }

    fn credit(&mut self, player_id: PlayerId, amount: Chips) {
        if let Some(p) = self.roster.get_mut(player_id) {
            p.balance += amount;
        }
    }

    /// Сбросить фолды, обнулить ставки и списать блайнды.
    /// Если SB и BB совпали (один активный игрок) – списывается только SB.
    fn post_blinds(&mut self, positions: &SeatPositions) {
        let (sb, bb) = (self.config.small_blind, self.config.big_blind);
        for p in self.roster.iter_mut() {
            p.has_folded = false;
            p.current_bet = Chips::ZERO;
            if !p.is_active {
                continue;
            }
            if p.id == positions.small_blind {
                p.balance -= sb;
                p.current_bet = sb;
            } else if p.id == positions.big_blind {
                p.balance -= bb;
                p.current_bet = bb;
            }
        }
    }

    fn record(&mut self, player_id: PlayerId, amount: Chips, kind: TransactionKind, description: String) {
        let tx = Transaction {
            id: self.ids.next_id(),
            player_id,
            amount,
            kind,
            timestamp: self.clock.now_millis(),
            description,
        };
        debug!("ledger <- #{} {:?} {} for player {}", tx.id, tx.kind, tx.amount, tx.player_id);
        self.ledger.push(tx);
    }

    fn refresh_bank(&mut self) {
        self.bank = bank_balance(&self.roster, self.config.starting_money);
    }
}
