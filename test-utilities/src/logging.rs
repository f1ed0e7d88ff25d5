#[ctor::ctor(anonymous)]
fn test_init() {
    runland_logging::init(4);
}
