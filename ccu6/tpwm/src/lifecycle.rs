//! Generic PWM lifecycle interface

use ccu6_core::Ccu6;

use crate::TPwm;

/// Lifecycle operations shared by PWM generators, so application code can
/// drive any generator without knowing which peripheral backs it
pub trait PwmLifecycle {
    /// Start counting and modulating
    fn start(&mut self);

    /// Stop counting and return outputs to their passive level
    fn stop(&mut self);

    /// Gate the output off while the counters keep running
    fn pause(&mut self);

    /// Gate the output back on after [`PwmLifecycle::pause`]
    fn resume(&mut self);
}

impl<R: Ccu6 + ?Sized> PwmLifecycle for TPwm<'_, R> {
    fn start(&mut self) {
        TPwm::start(self)
    }

    fn stop(&mut self) {
        TPwm::stop(self)
    }

    fn pause(&mut self) {
        TPwm::pause(self)
    }

    fn resume(&mut self) {
        TPwm::resume(self)
    }
}

/// Start every generator in `pwms`, in order
pub fn start_all(pwms: &mut [&mut dyn PwmLifecycle]) {
    for pwm in pwms.iter_mut() {
        pwm.start();
    }
}

/// Stop every generator in `pwms`, in order
pub fn stop_all(pwms: &mut [&mut dyn PwmLifecycle]) {
    for pwm in pwms.iter_mut() {
        pwm.stop();
    }
}
