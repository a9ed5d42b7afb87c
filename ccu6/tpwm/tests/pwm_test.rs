//! End-to-end PWM scenarios on a simulated CCU6 module

use ccu6_core::{
    Ccu6Error, ChannelOut, T12CountMode, T13TriggerDirection, T13TriggerEvent, TimerId,
    TrigOut, TrigSel, TIMER_REGISTER_MAX,
};
use ccu6_sim::{RegWrite, SimCcu6};
use ccu6_tpwm::lifecycle::{start_all, stop_all};
use ccu6_tpwm::{Config, PwmLifecycle, PwmState, TPwm};

#[test]
fn test_default_synchronized_pwm() {
    let sim = SimCcu6::new();
    let config = Config::new(&sim);
    assert_eq!(config.validate(), Ok(()));

    let mut pwm = TPwm::init_module(&config);
    pwm.start();

    let state = sim.snapshot();
    assert!(state.t12.available && state.t13.available);
    assert_eq!(state.t12_compare[0], 20);
    assert_eq!(state.t13_trigger_event, T13TriggerEvent::OnCC60RCompare);
    assert_eq!(state.t13_trigger_direction, T13TriggerDirection::OnT12CountingUp);
    assert_eq!(state.trigger_out[TrigOut::Out0 as usize], Some(TrigSel::Cout63));
    assert!(state.t12.running);
    assert!(!state.t13.running);
    assert!(state.is_modulating(TimerId::T13, ChannelOut::Cout3));

    pwm.stop();
    let state = sim.snapshot();
    assert!(!state.is_output_enabled(ChannelOut::Cout3));
    assert_eq!(state.t13_trigger_event, T13TriggerEvent::NoAction);
}

#[test]
fn test_t12_only_pwm_never_touches_t13() {
    let sim = SimCcu6::new();
    let mut config = Config::new(&sim);
    config.timer = TimerId::T12;
    config.channel_out = ChannelOut::Cc0;
    config.trigger.t13_in_sync_with_t12 = false;
    config.trigger.output_trigger_enabled = false;
    config.timer12.compare_value = 50;

    let mut pwm = TPwm::init_module(&config);
    pwm.start();
    pwm.pause();
    pwm.resume();
    pwm.stop();

    assert!(!sim.journal().touches(TimerId::T13));
    assert_eq!(sim.snapshot().t12_compare[0], 50);
}

#[test]
fn test_center_aligned_pwm_with_external_clock() {
    let sim = SimCcu6::new();
    let mut config = Config::new(&sim);
    config.timer = TimerId::T12;
    config.channel_out = ChannelOut::Cc0;
    config.trigger.t13_in_sync_with_t12 = false;
    config.clock.t12_ext_clock_enabled = true;
    config.timer12.count_mode = T12CountMode::CenterAligned;
    config.base.period = 200;
    assert_eq!(config.validate(), Ok(()));

    let _pwm = TPwm::init_module(&config);

    assert!(sim.journal().contains(&RegWrite::T12Period(99)));
    assert_eq!(sim.snapshot().t12_count_mode, T12CountMode::CenterAligned);
}

#[test]
fn test_validate_rejects_before_init() {
    let sim = SimCcu6::new();

    let mut config = Config::new(&sim);
    config.timer13.t12_sync_event = T13TriggerEvent::NoAction;
    assert_eq!(config.validate(), Err(Ccu6Error::SyncEventNoAction));

    let mut config = Config::new(&sim);
    config.base.period = TIMER_REGISTER_MAX + 1;
    config.trigger.t13_in_sync_with_t12 = false;
    assert_eq!(config.validate(), Err(Ccu6Error::PeriodOutOfRange));

    // validation is advisory, nothing was written
    assert!(sim.journal().writes().is_empty());
}

#[test]
fn test_two_generators_share_one_module() {
    let sim = SimCcu6::new();

    let mut t12_config = Config::new(&sim);
    t12_config.timer = TimerId::T12;
    t12_config.channel_out = ChannelOut::Cc0;
    t12_config.trigger.t13_in_sync_with_t12 = false;
    t12_config.trigger.output_trigger_enabled = false;

    let mut t13_config = Config::new(&sim);
    t13_config.trigger.t13_in_sync_with_t12 = false;

    let mut a = TPwm::init_module(&t12_config);
    let mut b = TPwm::init_module(&t13_config);
    assert_eq!(sim.journal().count(&RegWrite::EnableModule), 1);

    start_all(&mut [&mut a, &mut b]);
    let state = sim.snapshot();
    assert!(state.t12.running && state.t13.running);
    assert!(state.is_modulating(TimerId::T12, ChannelOut::Cc0));
    assert!(state.is_modulating(TimerId::T13, ChannelOut::Cout3));

    stop_all(&mut [&mut a, &mut b]);
    let state = sim.snapshot();
    assert!(!state.t12.running && !state.t13.running);
    assert!(!state.is_output_enabled(ChannelOut::Cc0));
    assert!(!state.is_output_enabled(ChannelOut::Cout3));
    assert_eq!(a.state(), PwmState::Stopped);
    assert_eq!(b.state(), PwmState::Stopped);
}

#[test]
fn test_lifecycle_through_trait_object() {
    let sim = SimCcu6::new();
    let mut pwm = TPwm::init_module(&Config::new(&sim));

    {
        let generic: &mut dyn PwmLifecycle = &mut pwm;
        generic.start();
        generic.pause();
    }
    assert_eq!(pwm.state(), PwmState::Paused);
    assert!(!sim.snapshot().is_output_enabled(ChannelOut::Cout3));

    {
        let generic: &mut dyn PwmLifecycle = &mut pwm;
        generic.resume();
        generic.stop();
    }
    assert_eq!(pwm.state(), PwmState::Stopped);
}
