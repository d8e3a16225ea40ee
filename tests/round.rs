//! Round engine integration tests.

use core::time::Duration;

use bjround::{
    BetDesk, Card, ChipId, Position, Pointer, PointerEvent, PointerTarget, RoundError, RoundEvent,
    RoundMachine, RoundOptions, RoundPhase, Seat, Settlement, Shoe, Suit, Winner,
};
use bjround::{HoleCard, OptionsError};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ChipCall {
    SelectAbove(ChipId),
    Deselect,
    Move(Position),
    AttemptBet,
    DealerCollectsBet,
    DealerPays(bool),
    PlayerCollects,
}

#[derive(Debug)]
struct RecordingChips {
    accept_bets: bool,
    calls: Vec<ChipCall>,
}

impl RecordingChips {
    const fn new() -> Self {
        Self {
            accept_bets: true,
            calls: Vec::new(),
        }
    }

    fn settlements(&self) -> Vec<ChipCall> {
        self.calls
            .iter()
            .copied()
            .filter(|call| {
                matches!(
                    call,
                    ChipCall::DealerCollectsBet | ChipCall::DealerPays(_) | ChipCall::PlayerCollects
                )
            })
            .collect()
    }

    fn bet_attempts(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == ChipCall::AttemptBet)
            .count()
    }
}

impl BetDesk for RecordingChips {
    fn select_chips_above(&mut self, chip: ChipId) {
        self.calls.push(ChipCall::SelectAbove(chip));
    }

    fn deselect_chips(&mut self) {
        self.calls.push(ChipCall::Deselect);
    }

    fn move_selected_chips(&mut self, to: Position) {
        self.calls.push(ChipCall::Move(to));
    }

    fn attempt_place_selected_bet(&mut self) -> bool {
        self.calls.push(ChipCall::AttemptBet);
        self.accept_bets
    }
}

impl Settlement for RecordingChips {
    fn dealer_collects_bet(&mut self) {
        self.calls.push(ChipCall::DealerCollectsBet);
    }

    fn dealer_pays(&mut self, blackjack: bool) {
        self.calls.push(ChipCall::DealerPays(blackjack));
    }

    fn player_collects(&mut self) {
        self.calls.push(ChipCall::PlayerCollects);
    }
}

#[derive(Debug)]
struct TestPointer {
    target: Option<PointerTarget>,
    position: Position,
    detecting: bool,
}

impl TestPointer {
    const fn new() -> Self {
        Self {
            target: None,
            position: Position::new(0.1, 0.0, 0.3),
            detecting: true,
        }
    }
}

impl Pointer for TestPointer {
    fn target(&self) -> Option<PointerTarget> {
        self.target
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_detect_new_targets(&mut self, detect: bool) {
        self.detecting = detect;
    }
}

type Machine = RoundMachine<Shoe, RecordingChips, TestPointer>;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn fast_options() -> RoundOptions {
    RoundOptions::default()
        .with_deal_delay(Duration::ZERO)
        .with_dealer_hit_delay(Duration::ZERO)
        .with_reset_delay(Duration::ZERO)
}

fn machine(options: RoundOptions, draws: &[Card]) -> Machine {
    RoundMachine::new(
        options,
        Shoe::stacked(draws),
        RecordingChips::new(),
        TestPointer::new(),
    )
    .unwrap()
}

fn run_until(m: &mut Machine, target: RoundPhase) -> Vec<RoundEvent> {
    let mut events = Vec::new();
    for _ in 0..100 {
        if m.phase() == target {
            return events;
        }
        events.extend(m.tick(&[], ms(100)).unwrap());
    }
    panic!("round never reached {target:?}, stuck in {:?}", m.phase());
}

fn place_bet(m: &mut Machine) {
    run_until(m, RoundPhase::Betting);
    let t = m.now();
    m.tick(&[PointerEvent::up(t)], ms(16)).unwrap();
    assert_eq!(m.phase(), RoundPhase::DealerShouldDeal);
}

fn start_round(m: &mut Machine) {
    place_bet(m);
    run_until(m, RoundPhase::PlayerTurn);
}

fn tap(m: &mut Machine) -> Vec<RoundEvent> {
    let t = m.now();
    m.tick(&[PointerEvent::down(t), PointerEvent::up(t + ms(100))], ms(100))
        .unwrap()
}

fn hold(m: &mut Machine) -> Vec<RoundEvent> {
    let t = m.now();
    m.tick(&[PointerEvent::down(t), PointerEvent::up(t + ms(600))], ms(600))
        .unwrap()
}

fn values(cards: &[Card]) -> Vec<u8> {
    cards.iter().map(Card::value).collect()
}

#[test]
fn new_machine_enters_betting_on_first_tick() {
    let mut m = machine(fast_options(), &[]);
    assert_eq!(m.phase(), RoundPhase::Resetting);

    let events = m.tick(&[], ms(16)).unwrap();
    assert_eq!(m.phase(), RoundPhase::Betting);
    assert!(events.contains(&RoundEvent::HandsCleared));
    assert!(!m.is_sequence_active());
}

#[test]
fn zero_stay_hold_time_is_rejected() {
    let options = RoundOptions::default().with_stay_hold_time(Duration::ZERO);
    let result = RoundMachine::new(
        options,
        Shoe::stacked(&[]),
        RecordingChips::new(),
        TestPointer::new(),
    );
    assert_eq!(result.err(), Some(OptionsError::ZeroStayHoldTime));
}

#[test]
fn betting_forwards_selection_and_drag() {
    let mut m = machine(fast_options(), &[]);
    run_until(&mut m, RoundPhase::Betting);

    m.pointer_mut().target = Some(PointerTarget::Chip(ChipId(7)));
    let t = m.now();
    m.tick(&[PointerEvent::down(t)], ms(16)).unwrap();

    assert!(!m.pointer().detecting);
    let calls = &m.chips().calls;
    assert!(calls.contains(&ChipCall::SelectAbove(ChipId(7))));
    assert_eq!(
        calls.last(),
        Some(&ChipCall::Move(Position::new(0.1, 0.0, 0.3)))
    );

    m.pointer_mut().target = Some(PointerTarget::Other);
    m.tick(&[], ms(16)).unwrap();
    assert_eq!(m.chips().calls.last(), Some(&ChipCall::Deselect));
    assert_eq!(m.phase(), RoundPhase::Betting);
}

#[test]
fn rejected_bet_stays_in_betting() {
    let mut chips = RecordingChips::new();
    chips.accept_bets = false;
    let mut m = RoundMachine::new(fast_options(), Shoe::stacked(&[]), chips, TestPointer::new())
        .unwrap();
    run_until(&mut m, RoundPhase::Betting);

    let t = m.now();
    m.tick(&[PointerEvent::down(t), PointerEvent::up(t + ms(16))], ms(16))
        .unwrap();

    assert_eq!(m.phase(), RoundPhase::Betting);
    assert_eq!(m.chips().bet_attempts(), 1);
    assert!(m.pointer().detecting);
}

#[test]
fn initial_deal_is_paced_by_deal_delay() {
    let options = fast_options().with_deal_delay(ms(100));
    let mut m = machine(
        options,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 10),  // dealer hole
        ],
    );
    place_bet(&mut m);

    m.tick(&[], Duration::ZERO).unwrap();
    assert_eq!(m.phase(), RoundPhase::DealerDealing);
    assert_eq!(m.player_hand().len(), 1);
    assert_eq!(m.dealer_hand().len(), 0);

    // Pointer input is ignored while cards are in flight.
    let t = m.now();
    let events = m
        .tick(
            &[PointerEvent::down(t), PointerEvent::up(t + ms(50))],
            ms(100),
        )
        .unwrap();
    assert_eq!(m.player_hand().len(), 1);
    assert_eq!(m.dealer_hand().len(), 1);
    assert!(m.dealer_hand().cards()[0].is_face_up());
    assert!(matches!(
        events.as_slice(),
        [RoundEvent::CardDealt {
            seat: Seat::Dealer,
            index: 0,
            ..
        }]
    ));

    m.tick(&[], ms(100)).unwrap();
    assert_eq!(m.player_hand().len(), 2);

    let events = m.tick(&[], ms(100)).unwrap();
    assert_eq!(m.dealer_hand().len(), 2);
    assert!(!m.dealer_hand().cards()[1].is_face_up());
    let placement = m.options().layout.placement(Seat::Dealer, 1);
    assert!(events.contains(&RoundEvent::CardDealt {
        seat: Seat::Dealer,
        index: 1,
        card: m.dealer_hand().cards()[1],
        placement,
    }));
    assert_eq!(m.phase(), RoundPhase::DealerDealing);

    m.tick(&[], ms(100)).unwrap();
    assert_eq!(m.phase(), RoundPhase::PlayerTurn);
    assert!(!m.is_sequence_active());
}

#[test]
fn player_blackjack_beats_dealer_twenty() {
    let mut m = machine(
        fast_options(),
        &[
            card(Suit::Spades, 1),   // player
            card(Suit::Hearts, 10),  // dealer up
            card(Suit::Clubs, 13),   // player
            card(Suit::Diamonds, 12), // dealer hole
        ],
    );
    start_round(&mut m);

    hold(&mut m);
    assert_eq!(m.phase(), RoundPhase::DealerRevealHole);

    let events = run_until(&mut m, RoundPhase::PlayerWin);
    assert!(events.iter().any(|e| matches!(
        e,
        RoundEvent::HoleRevealed { index: 1, card } if card.is_face_up()
    )));

    m.tick(&[], ms(16)).unwrap();
    assert_eq!(
        m.chips().settlements(),
        vec![ChipCall::DealerPays(true), ChipCall::PlayerCollects]
    );

    let outcome = m.last_outcome().unwrap();
    assert_eq!(outcome.winner, Winner::Player);
    assert!(outcome.player_blackjack);
    assert_eq!(outcome.player_sum, 21);
    assert_eq!(outcome.dealer_sum, 20);
}

#[test]
fn player_bust_goes_straight_to_dealer_win() {
    let mut m = machine(
        fast_options(),
        &[
            card(Suit::Hearts, 10), // player
            card(Suit::Clubs, 9),   // dealer up
            card(Suit::Spades, 9),  // player
            card(Suit::Diamonds, 7), // dealer hole
            card(Suit::Hearts, 5),  // player hit
        ],
    );
    start_round(&mut m);

    tap(&mut m);
    assert_eq!(m.phase(), RoundPhase::DealerWin);
    assert_eq!(values(m.player_hand().cards()), vec![10, 9, 5]);
    assert_eq!(m.dealer_hand().len(), 2);
    assert!(!m.dealer_hand().cards()[1].is_face_up());

    m.tick(&[], ms(16)).unwrap();
    assert_eq!(m.chips().settlements(), vec![ChipCall::DealerCollectsBet]);
    let outcome = m.last_outcome().unwrap();
    assert_eq!(outcome.winner, Winner::Dealer);
    assert_eq!(outcome.player_sum, 24);
}

#[test]
fn dealer_draws_to_eighteen_and_pushes() {
    let mut m = machine(
        fast_options(),
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 7),    // dealer up
            card(Suit::Spades, 8),   // player
            card(Suit::Diamonds, 6), // dealer hole
            card(Suit::Hearts, 5),   // dealer hit
        ],
    );
    start_round(&mut m);

    hold(&mut m);
    run_until(&mut m, RoundPhase::Push);
    assert_eq!(values(m.dealer_hand().cards()), vec![7, 6, 5]);

    m.tick(&[], ms(16)).unwrap();
    assert_eq!(m.chips().settlements(), vec![ChipCall::PlayerCollects]);
    let outcome = m.last_outcome().unwrap();
    assert_eq!(outcome.winner, Winner::Push);
    assert_eq!(outcome.player_sum, 18);
    assert_eq!(outcome.dealer_sum, 18);
}

#[test]
fn dealer_hit_waits_for_hit_delay() {
    let options = fast_options().with_dealer_hit_delay(ms(100));
    let mut m = machine(
        options,
        &[
            card(Suit::Hearts, 10), // player
            card(Suit::Clubs, 10),  // dealer up
            card(Suit::Spades, 9),  // player
            card(Suit::Diamonds, 4), // dealer hole
            card(Suit::Hearts, 9),  // dealer hit
        ],
    );
    start_round(&mut m);
    hold(&mut m);
    run_until(&mut m, RoundPhase::DealerTurn);

    m.tick(&[], Duration::ZERO).unwrap();
    assert_eq!(m.phase(), RoundPhase::DealerDealing);
    assert_eq!(m.dealer_hand().len(), 2);

    m.tick(&[], ms(50)).unwrap();
    assert_eq!(m.dealer_hand().len(), 2);

    // The hit lands and the dealer turn that follows runs in the same frame.
    let events = m.tick(&[], ms(50)).unwrap();
    assert_eq!(m.dealer_hand().len(), 3);
    assert!(m.dealer_hand().cards()[2].is_face_up());
    assert!(events.contains(&RoundEvent::PhaseChanged {
        from: RoundPhase::DealerDealing,
        to: RoundPhase::DealerTurn,
    }));
    assert_eq!(m.phase(), RoundPhase::PlayerWin);
    assert_eq!(m.dealer_policy(), bjround::DealerPolicy::Busted);
}

#[test]
fn dealer_soft_ace_is_corrected_before_hitting_again() {
    let mut m = machine(
        fast_options(),
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 1),    // dealer up
            card(Suit::Spades, 9),   // player
            card(Suit::Diamonds, 5), // dealer hole
            card(Suit::Hearts, 13),  // dealer hit: soft 16 + 10
            card(Suit::Clubs, 2),    // dealer hit
        ],
    );
    start_round(&mut m);
    hold(&mut m);

    let events = run_until(&mut m, RoundPhase::PlayerWin);
    assert!(events.contains(&RoundEvent::AceCorrected {
        seat: Seat::Dealer,
        index: 0,
        card: m.dealer_hand().cards()[0],
    }));
    assert_eq!(values(m.dealer_hand().cards()), vec![1, 5, 10, 2]);

    m.tick(&[], ms(16)).unwrap();
    assert_eq!(
        m.chips().settlements(),
        vec![ChipCall::DealerPays(false), ChipCall::PlayerCollects]
    );
    assert_eq!(m.last_outcome().unwrap().dealer_sum, 18);
}

#[test]
fn player_hit_corrects_one_ace_at_a_time() {
    let mut m = machine(
        fast_options(),
        &[
            card(Suit::Hearts, 1),   // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Spades, 1),   // player
            card(Suit::Diamonds, 8), // dealer hole
            card(Suit::Hearts, 9),   // player hit
        ],
    );
    start_round(&mut m);
    assert_eq!(values(m.player_hand().cards()), vec![11, 11]);

    let events = tap(&mut m);
    assert_eq!(m.phase(), RoundPhase::PlayerTurn);
    assert_eq!(values(m.player_hand().cards()), vec![1, 11, 9]);
    let corrections: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, RoundEvent::AceCorrected { .. }))
        .collect();
    assert_eq!(corrections.len(), 1);
}

#[test]
fn holding_past_threshold_stays_without_release() {
    let mut m = machine(
        fast_options(),
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 8),
            card(Suit::Diamonds, 9),
        ],
    );
    start_round(&mut m);

    let t = m.now();
    m.tick(&[PointerEvent::down(t)], Duration::ZERO).unwrap();
    m.tick(&[PointerEvent::held(t + ms(200))], ms(200)).unwrap();
    assert_eq!(m.phase(), RoundPhase::PlayerTurn);

    m.tick(&[PointerEvent::held(t + ms(600))], ms(400)).unwrap();
    assert_eq!(m.phase(), RoundPhase::DealerRevealHole);
    assert_eq!(m.player_hand().len(), 2);
}

#[test]
fn release_without_press_is_ignored() {
    let mut m = machine(
        fast_options(),
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 8),
            card(Suit::Diamonds, 9),
        ],
    );
    start_round(&mut m);

    let t = m.now();
    m.tick(&[PointerEvent::up(t)], ms(16)).unwrap();
    assert_eq!(m.phase(), RoundPhase::PlayerTurn);
    assert_eq!(m.player_hand().len(), 2);
}

#[test]
fn reset_clears_hands_before_next_bet() {
    let options = fast_options().with_reset_delay(ms(1000));
    let mut m = machine(
        options,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Spades, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Hearts, 5),
        ],
    );
    start_round(&mut m);
    tap(&mut m);
    m.tick(&[], ms(16)).unwrap();
    assert_eq!(m.phase(), RoundPhase::Resetting);
    assert_eq!(m.player_hand().len(), 3);

    let attempts = m.chips().bet_attempts();
    let t = m.now();
    m.tick(&[PointerEvent::up(t)], ms(500)).unwrap();
    assert_eq!(m.phase(), RoundPhase::Resetting);
    assert_eq!(m.chips().bet_attempts(), attempts);
    assert!(!m.player_hand().is_empty());

    let events = m.tick(&[], ms(500)).unwrap();
    assert!(events.contains(&RoundEvent::HandsCleared));
    assert_eq!(m.phase(), RoundPhase::Betting);
    assert!(m.player_hand().is_empty());
    assert!(m.dealer_hand().is_empty());
}

#[test]
fn natural_settles_immediately_when_enabled() {
    let options = fast_options().with_settle_naturals(true);
    let mut m = machine(
        options,
        &[
            card(Suit::Hearts, 1),   // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Spades, 12),  // player
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );
    start_round(&mut m);

    let events = m.tick(&[], ms(16)).unwrap();
    assert_eq!(m.phase(), RoundPhase::PlayerWin);
    assert!(m.dealer_hand().cards()[1].is_face_up());
    assert!(events.iter().any(|e| matches!(e, RoundEvent::HoleRevealed { .. })));

    m.tick(&[], ms(16)).unwrap();
    assert_eq!(
        m.chips().settlements(),
        vec![ChipCall::DealerPays(true), ChipCall::PlayerCollects]
    );
}

#[test]
fn natural_against_dealer_natural_pushes() {
    let options = fast_options().with_settle_naturals(true);
    let mut m = machine(
        options,
        &[
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 1),
            card(Suit::Spades, 12),
            card(Suit::Diamonds, 10),
        ],
    );
    start_round(&mut m);

    m.tick(&[], ms(16)).unwrap();
    assert_eq!(m.phase(), RoundPhase::Push);
}

#[test]
fn first_dealer_card_can_be_the_hole_card() {
    let options = fast_options().with_hole_card(HoleCard::First);
    let mut m = machine(
        options,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 8),
            card(Suit::Diamonds, 9),
        ],
    );
    start_round(&mut m);
    assert!(!m.dealer_hand().cards()[0].is_face_up());
    assert!(m.dealer_hand().cards()[1].is_face_up());

    hold(&mut m);
    let events = m.tick(&[], ms(16)).unwrap();
    assert!(events.iter().any(|e| matches!(e, RoundEvent::HoleRevealed { index: 0, .. })));
    assert_eq!(m.phase(), RoundPhase::DealerTurn);
}

#[test]
fn exhausted_supply_is_fatal() {
    let mut m = machine(
        fast_options(),
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 8),
        ],
    );
    place_bet(&mut m);

    let err = m.tick(&[], ms(16)).unwrap_err();
    assert_eq!(err, RoundError::CardSupplyExhausted { seat: Seat::Dealer });
    assert_eq!(m.phase(), RoundPhase::DealerDealing);

    let now = m.now();
    for _ in 0..3 {
        let t = m.now();
        let again = m
            .tick(&[PointerEvent::down(t), PointerEvent::up(t + ms(16))], ms(16))
            .unwrap_err();
        assert_eq!(again, err);
    }
    assert_eq!(m.phase(), RoundPhase::DealerDealing);
    assert_eq!(m.now(), now);
    assert_eq!(m.player_hand().len(), 2);
    assert_eq!(m.dealer_hand().len(), 1);
}

#[test]
fn press_in_the_frame_that_opens_player_turn_counts() {
    let options = fast_options().with_deal_delay(ms(100));
    let mut m = machine(
        options,
        &[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 6),
            card(Suit::Diamonds, 7),
            card(Suit::Hearts, 2), // player hit
        ],
    );
    place_bet(&mut m);

    m.tick(&[], Duration::ZERO).unwrap();
    for _ in 0..3 {
        m.tick(&[], ms(100)).unwrap();
    }
    assert_eq!(m.phase(), RoundPhase::DealerDealing);
    assert_eq!(m.dealer_hand().len(), 2);

    let t = m.now() + ms(100);
    m.tick(&[PointerEvent::down(t)], ms(100)).unwrap();
    assert_eq!(m.phase(), RoundPhase::PlayerTurn);

    m.tick(&[PointerEvent::up(t + ms(100))], ms(100)).unwrap();
    assert_eq!(values(m.player_hand().cards()), vec![5, 6, 2]);
    assert_eq!(m.phase(), RoundPhase::PlayerTurn);
}
