use city_ngin::SceneSettings;

fn main() -> anyhow::Result<()> {
    let mut settings = SceneSettings::default();
    // `city --clock` lets the moon follow a four minute day
    settings.moon_follows_clock = std::env::args().any(|arg| arg == "--clock");
    city_ngin::flow::run(settings)
}
