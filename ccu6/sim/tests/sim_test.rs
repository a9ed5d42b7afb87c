//! Simulator register model tests

use ccu6_core::{
    Ccu6Registers, ChannelOut, InterruptRouter, InterruptSource, OutputMode, OutputPin,
    OutputSignal, PadDriver, PinMux, ServiceRequest, T12CountMode, TimerId, TrigOut, TrigSel,
    TypeOfService,
};
use ccu6_sim::{Prescaler, RegWrite, SimCcu6, JOURNAL_CAPACITY};

#[test]
fn test_fresh_module_is_disabled() {
    let sim = SimCcu6::default();
    let state = sim.snapshot();
    assert!(!state.module_enabled);
    assert!(!state.t12.available);
    assert!(!state.t13.available);
    assert!(sim.journal().writes().is_empty());
}

#[test]
fn test_module_clock_drives_prescaler() {
    let sim = SimCcu6::with_module_clock(50_000_000);
    let actual = sim.set_t13_frequency(12_500_000, 500);

    let state = sim.snapshot();
    assert_eq!(actual, 12_500_000);
    assert_eq!(state.t13.prescaler, Prescaler { clk: 2, pre: false });
    assert_eq!(state.t13.period, 500);
}

#[test]
fn test_edge_aligned_frequency_keeps_period() {
    let sim = SimCcu6::new();
    sim.set_t12_frequency(400_000, 100, T12CountMode::EdgeAligned);
    assert_eq!(sim.snapshot().t12.period, 100);
}

#[test]
fn test_rebinding_pin_replaces_entry() {
    let sim = SimCcu6::new();
    let first = OutputPin::new(OutputSignal::Cout63, 0, 12, 7);
    let second = OutputPin::new(OutputSignal::Cout63, 2, 3, 5);
    sim.init_output_pin(&first, OutputMode::PushPull, PadDriver::default());
    sim.init_output_pin(&second, OutputMode::OpenDrain, PadDriver::default());

    let state = sim.snapshot();
    assert_eq!(state.output_pins.len(), 1);
    assert_eq!(state.output_pins[0].0, second);
    assert_eq!(sim.journal().writes().len(), 2);
}

#[test]
fn test_interrupt_routing() {
    let sim = SimCcu6::new();
    sim.enable_interrupt(InterruptSource::T13CompareMatch);
    sim.route_interrupt_node(InterruptSource::T13CompareMatch, ServiceRequest::Sr2);
    sim.init_service_request(ServiceRequest::Sr2, TypeOfService::Dma, 5);

    let state = sim.snapshot();
    assert!(state.is_interrupt_enabled(InterruptSource::T13CompareMatch));
    assert!(!state.is_interrupt_enabled(InterruptSource::T13PeriodMatch));
    assert_eq!(state.route_of(InterruptSource::T13CompareMatch), Some(ServiceRequest::Sr2));
    let sr = state.service_request(ServiceRequest::Sr2);
    assert_eq!(sr.type_of_service, TypeOfService::Dma);
    assert_eq!(sr.priority, 5);
    assert!(!sr.enabled);
}

#[test]
fn test_trigger_output_lines() {
    let sim = SimCcu6::new();
    sim.connect_trigger(TrigOut::Out2, TrigSel::T13PeriodMatch);

    let state = sim.snapshot();
    assert_eq!(state.trigger_out[TrigOut::Out2 as usize], Some(TrigSel::T13PeriodMatch));
    assert_eq!(state.trigger_out[TrigOut::Out0 as usize], None);
}

#[test]
fn test_journal_reports_timer_touches() {
    let sim = SimCcu6::new();
    sim.enable_module();
    sim.connect_trigger(TrigOut::Out0, TrigSel::Cout63);
    assert!(!sim.journal().touches(TimerId::T12));
    assert!(!sim.journal().touches(TimerId::T13));

    sim.enable_modulation_output(TimerId::T12, ChannelOut::Cc1);
    assert!(sim.journal().touches(TimerId::T12));
    assert!(!sim.journal().touches(TimerId::T13));
}

#[test]
fn test_journal_overflow_keeps_registers_current() {
    let sim = SimCcu6::new();
    for value in 0..(JOURNAL_CAPACITY as u16 + 10) {
        sim.set_t12_counter_value(value);
    }

    let journal = sim.journal();
    assert!(journal.overflowed());
    assert_eq!(journal.writes().len(), JOURNAL_CAPACITY);
    assert_eq!(sim.snapshot().t12.counter, JOURNAL_CAPACITY as u16 + 9);

    sim.clear_journal();
    assert!(!sim.journal().overflowed());
    assert!(!sim.journal().contains(&RegWrite::T12Counter(0)));
}

#[test]
fn test_counter_wraps_at_register_width() {
    let sim = SimCcu6::new();
    sim.set_t13_counter_value(0xFFF0);
    sim.start_timer(TimerId::T13);
    sim.tick(TimerId::T13, 0x20);
    assert_eq!(sim.snapshot().t13.counter, 0x0010);
}
