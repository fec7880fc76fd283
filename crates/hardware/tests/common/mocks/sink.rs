use mockall::mock;
use ppcmmu_core::common::FaultStatus;
use ppcmmu_core::core::cpu::trap::ExceptionSink;

mock! {
    pub Sink {}
    impl ExceptionSink for Sink {
        fn signal(&mut self, status: &FaultStatus);
    }
}

impl MockSink {
    /// A sink that fails the test if it is ever called.
    pub fn silent() -> Self {
        let mut sink = Self::new();
        sink.expect_signal().never();
        sink
    }
}
