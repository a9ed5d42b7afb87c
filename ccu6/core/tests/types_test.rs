//! Vocabulary tests for ccu6-core

use ccu6_core::{
    Ccu6Error, ChannelOut, InterruptConfig, InterruptSource, ServiceRequest, T13TriggerEvent,
    TypeOfService, TIMER_REGISTER_MAX,
};

#[test]
fn test_register_width() {
    assert_eq!(TIMER_REGISTER_MAX, 0xFFFF);
}

#[test]
fn test_output_masks_are_distinct() {
    let outputs = [
        ChannelOut::Cc0,
        ChannelOut::Cout0,
        ChannelOut::Cc1,
        ChannelOut::Cout1,
        ChannelOut::Cc2,
        ChannelOut::Cout2,
        ChannelOut::Cout3,
    ];
    let combined = outputs.iter().fold(0u8, |acc, out| {
        assert_eq!(acc & out.mask(), 0);
        acc | out.mask()
    });
    assert_eq!(combined, 0x7F);
}

#[test]
fn test_disabled_interrupt_slot() {
    let slot = InterruptConfig::disabled(InterruptSource::T12PeriodMatch, ServiceRequest::Sr0);
    assert_eq!(slot.priority, 0);
    assert_eq!(slot.type_of_service, TypeOfService::Cpu0);
    assert!(!slot.is_enabled());
}

#[test]
fn test_only_no_action_is_inert() {
    let events = [
        T13TriggerEvent::OnCC60RCompare,
        T13TriggerEvent::OnCC61RCompare,
        T13TriggerEvent::OnCC62RCompare,
        T13TriggerEvent::OnAnyT12Compare,
        T13TriggerEvent::OnT12Period,
        T13TriggerEvent::OnT12Zero,
        T13TriggerEvent::OnCCPOSxEdge,
    ];
    assert!(events.iter().all(|e| e.is_action()));
    assert!(!T13TriggerEvent::NoAction.is_action());
}

#[test]
fn test_error_display() {
    assert_eq!(
        Ccu6Error::PeriodOutOfRange.to_string(),
        "Period exceeds timer width"
    );
}
