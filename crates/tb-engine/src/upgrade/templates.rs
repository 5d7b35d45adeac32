//! Per-category recommendation wording and priority
//!
//! `Part::specs` keys read per category:
//!
//! | category    | keys                      |
//! |-------------|---------------------------|
//! | gpu         | `vram`                    |
//! | cpu         | `cores`, `threads`        |
//! | ram         | `capacity`, `speed`       |
//! | storage     | `capacity`, `readSpeed`   |
//! | psu         | `wattage`, `efficiency`   |
//! | cooler      | `tdpRating`               |
//! | motherboard | `chipset`                 |
//! | case        | `formFactor`              |
//! | monitor     | `resolution`, `refreshRate` |
//! | keyboard    | `switches`                |
//! | mouse       | `dpi`                     |
//! | headset     | `driver`                  |
//!
//! A missing key falls back to describing the trust score gain.

use tb_core::{Category, Part};

use super::Priority;

/// What a template gets to work with
pub struct Context<'a> {
    pub current: Option<&'a Part>,
    /// Model of the installed part, or the user's free text
    pub current_name: &'a str,
    pub recommended: &'a Part,
}

pub struct Template {
    pub priority: fn(Option<&Part>) -> Priority,
    pub reason: fn(&Context<'_>) -> String,
    pub gain: fn(&Context<'_>) -> String,
}

pub fn for_category(category: Category) -> &'static Template {
    match category {
        Category::Cpu => &CPU,
        Category::Gpu => &GPU,
        Category::Motherboard => &MOTHERBOARD,
        Category::Ram => &RAM,
        Category::Storage => &STORAGE,
        Category::Psu => &PSU,
        Category::Case => &CASE,
        Category::Cooler => &COOLER,
        Category::Monitor => &MONITOR,
        Category::Keyboard => &KEYBOARD,
        Category::Mouse => &MOUSE,
        Category::Headset => &HEADSET,
    }
}

/// Current CPUs scoring below this are a high-priority upgrade
const CPU_HIGH_PRIORITY_BELOW: u8 = 85;

fn high(_: Option<&Part>) -> Priority {
    Priority::High
}

fn medium(_: Option<&Part>) -> Priority {
    Priority::Medium
}

fn low(_: Option<&Part>) -> Priority {
    Priority::Low
}

/// Unknown (free-text) CPUs are treated like weak ones
fn cpu_priority(current: Option<&Part>) -> Priority {
    match current {
        Some(part) if part.trust_score >= CPU_HIGH_PRIORITY_BELOW => Priority::Medium,
        _ => Priority::High,
    }
}

static GPU: Template = Template {
    priority: high,
    reason: |ctx| {
        format!(
            "Upgrade from {} to {} for significantly better gaming performance.",
            ctx.current_name, ctx.recommended.model
        )
    },
    gain: |ctx| match ctx.recommended.spec("vram") {
        Some(vram) => format!("{vram} VRAM"),
        None => reliability_gain(ctx),
    },
};

static CPU: Template = Template {
    priority: cpu_priority,
    reason: |ctx| {
        format!(
            "Upgrade to {} for better multi-threaded performance and gaming.",
            ctx.recommended.model
        )
    },
    gain: |ctx| {
        let new = ctx.recommended.spec_number("cores");
        let old = ctx.current.and_then(|p| p.spec_number("cores"));
        let cores = match (new, old) {
            (Some(new), Some(old)) if new > old => format!("+{} cores", new - old),
            (Some(new), _) => format!("{new} cores"),
            (None, _) => return reliability_gain(ctx),
        };
        match ctx.recommended.spec_number("threads") {
            Some(threads) => format!("{cores}, {threads} threads"),
            None => cores,
        }
    },
};

static MOTHERBOARD: Template = Template {
    priority: low,
    reason: |ctx| {
        format!(
            "{} gives you a more reliable platform with better power delivery and connectivity.",
            ctx.recommended.model
        )
    },
    gain: |ctx| match ctx.recommended.spec("chipset") {
        Some(chipset) => format!("{chipset} chipset"),
        None => reliability_gain(ctx),
    },
};

static RAM: Template = Template {
    priority: low,
    reason: |_| "Faster RAM can improve gaming performance, especially with AMD CPUs.".to_string(),
    gain: |ctx| {
        let part = ctx.recommended;
        match (part.spec("capacity"), part.spec("speed")) {
            (Some(capacity), Some(speed)) => format!("{capacity} @ {speed}"),
            (None, Some(speed)) => speed.to_string(),
            (Some(capacity), None) => capacity.to_string(),
            (None, None) => reliability_gain(ctx),
        }
    },
};

static STORAGE: Template = Template {
    priority: low,
    reason: |_| {
        "Faster SSD for quicker load times and better overall system responsiveness.".to_string()
    },
    gain: |ctx| {
        let part = ctx.recommended;
        match (part.spec("capacity"), part.spec("readSpeed")) {
            (Some(capacity), Some(speed)) => format!("{capacity}, {speed} read"),
            (None, Some(speed)) => format!("{speed} read"),
            (Some(capacity), None) => capacity.to_string(),
            (None, None) => reliability_gain(ctx),
        }
    },
};

static PSU: Template = Template {
    priority: medium,
    reason: |_| {
        "A higher quality power supply protects every other component and leaves headroom for upgrades."
            .to_string()
    },
    gain: |ctx| {
        let part = ctx.recommended;
        match (part.spec_number("wattage"), part.spec("efficiency")) {
            (Some(watts), Some(rating)) => format!("{watts}W {rating}"),
            (Some(watts), None) => format!("{watts}W"),
            _ => reliability_gain(ctx),
        }
    },
};

static CASE: Template = Template {
    priority: low,
    reason: |_| "Better airflow lowers temperatures across the whole system.".to_string(),
    gain: |ctx| match ctx.recommended.spec("formFactor") {
        Some(form) => format!("{form} form factor"),
        None => reliability_gain(ctx),
    },
};

static COOLER: Template = Template {
    priority: medium,
    reason: |_| "Better cooling keeps boost clocks up for longer and the system quieter.".to_string(),
    gain: |ctx| match ctx.recommended.spec_number("tdpRating") {
        Some(tdp) => format!("Rated for {tdp}W TDP"),
        None => reliability_gain(ctx),
    },
};

static MONITOR: Template = Template {
    priority: high,
    reason: |ctx| {
        format!(
            "{} is the most visible upgrade you can make to every game you play.",
            ctx.recommended.model
        )
    },
    gain: |ctx| {
        let part = ctx.recommended;
        match (part.spec("resolution"), part.spec_number("refreshRate")) {
            (Some(res), Some(hz)) => format!("{res} @ {hz}Hz"),
            (None, Some(hz)) => format!("{hz}Hz"),
            (Some(res), None) => res.to_string(),
            (None, None) => reliability_gain(ctx),
        }
    },
};

static KEYBOARD: Template = Template {
    priority: medium,
    reason: |ctx| format!("{} is a more durable, more responsive keyboard.", ctx.recommended.model),
    gain: |ctx| match ctx.recommended.spec("switches") {
        Some(switches) => format!("{switches} switches"),
        None => reliability_gain(ctx),
    },
};

static MOUSE: Template = Template {
    priority: medium,
    reason: |ctx| format!("{} tracks more precisely and lasts longer.", ctx.recommended.model),
    gain: |ctx| match ctx.recommended.spec_number("dpi") {
        Some(dpi) => format!("{dpi} DPI"),
        None => reliability_gain(ctx),
    },
};

static HEADSET: Template = Template {
    priority: low,
    reason: |ctx| format!("{} offers clearer positional audio.", ctx.recommended.model),
    gain: |ctx| match ctx.recommended.spec("driver") {
        Some(driver) => format!("{driver} drivers"),
        None => reliability_gain(ctx),
    },
};

/// Relative trust gain over the installed part, or the new score alone
fn reliability_gain(ctx: &Context<'_>) -> String {
    let new = f64::from(ctx.recommended.trust_score);
    match ctx.current {
        Some(current) if current.trust_score > 0 => {
            let old = f64::from(current.trust_score);
            format!("+{}% reliability", ((new - old) / old * 100.0).round())
        }
        _ => format!("Trust score {}", ctx.recommended.trust_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::part;
    use tb_core::SpecValue;

    fn with_spec(mut part: Part, key: &str, value: SpecValue) -> Part {
        part.specs.insert(key.to_string(), value);
        part
    }

    fn render(category: Category, current: Option<&Part>, recommended: &Part) -> (String, String) {
        let template = for_category(category);
        let ctx = Context {
            current,
            current_name: current.map_or("your current part", |p| p.model.as_str()),
            recommended,
        };
        ((template.reason)(&ctx), (template.gain)(&ctx))
    }

    #[test]
    fn test_fixed_priorities() {
        let expected = [
            (Category::Gpu, Priority::High),
            (Category::Monitor, Priority::High),
            (Category::Cooler, Priority::Medium),
            (Category::Psu, Priority::Medium),
            (Category::Keyboard, Priority::Medium),
            (Category::Mouse, Priority::Medium),
            (Category::Motherboard, Priority::Low),
            (Category::Ram, Priority::Low),
            (Category::Storage, Priority::Low),
            (Category::Case, Priority::Low),
            (Category::Headset, Priority::Low),
        ];
        for (category, priority) in expected {
            assert_eq!((for_category(category).priority)(None), priority, "{category}");
        }
    }

    #[test]
    fn test_cpu_priority_threshold() {
        let priority = for_category(Category::Cpu).priority;
        assert_eq!(priority(Some(&part("c", Category::Cpu, 84, 1.0))), Priority::High);
        assert_eq!(priority(Some(&part("c", Category::Cpu, 85, 1.0))), Priority::Medium);
        assert_eq!(priority(None), Priority::High);
    }

    #[test]
    fn test_gpu_mentions_vram() {
        let old = part("gpu-old", Category::Gpu, 70, 300.0);
        let new = with_spec(
            part("gpu-new", Category::Gpu, 85, 550.0),
            "vram",
            SpecValue::Text("16GB".into()),
        );
        let (reason, gain) = render(Category::Gpu, Some(&old), &new);
        assert_eq!(
            reason,
            "Upgrade from GPU-OLD to GPU-NEW for significantly better gaming performance."
        );
        assert_eq!(gain, "16GB VRAM");
    }

    #[test]
    fn test_cpu_core_delta() {
        let old = with_spec(part("cpu-old", Category::Cpu, 70, 1.0), "cores", SpecValue::Number(6.0));
        let new = with_spec(part("cpu-new", Category::Cpu, 90, 1.0), "cores", SpecValue::Number(8.0));
        assert_eq!(render(Category::Cpu, Some(&old), &new).1, "+2 cores");
        assert_eq!(render(Category::Cpu, None, &new).1, "8 cores");

        let threaded = with_spec(new, "threads", SpecValue::Number(16.0));
        assert_eq!(render(Category::Cpu, Some(&old), &threaded).1, "+2 cores, 16 threads");
    }

    #[test]
    fn test_storage_capacity_and_read_speed() {
        let new = with_spec(
            with_spec(part("ssd", Category::Storage, 90, 1.0), "capacity", SpecValue::Text("2TB".into())),
            "readSpeed",
            SpecValue::Text("7,000 MB/s".into()),
        );
        assert_eq!(render(Category::Storage, None, &new).1, "2TB, 7,000 MB/s read");
    }

    #[test]
    fn test_ram_capacity_and_speed() {
        let new = with_spec(
            with_spec(part("ram", Category::Ram, 90, 1.0), "capacity", SpecValue::Text("32GB".into())),
            "speed",
            SpecValue::Text("DDR5-6000".into()),
        );
        assert_eq!(render(Category::Ram, None, &new).1, "32GB @ DDR5-6000");
    }

    #[test]
    fn test_psu_wattage_from_text() {
        let new = with_spec(part("psu", Category::Psu, 90, 1.0), "wattage", SpecValue::Text("850W".into()));
        assert_eq!(render(Category::Psu, None, &new).1, "850W");
    }

    #[test]
    fn test_monitor_resolution_and_refresh() {
        let new = with_spec(
            with_spec(part("mon", Category::Monitor, 90, 1.0), "resolution", SpecValue::Text("2560x1440".into())),
            "refreshRate",
            SpecValue::Number(165.0),
        );
        assert_eq!(render(Category::Monitor, None, &new).1, "2560x1440 @ 165Hz");
    }

    #[test]
    fn test_falls_back_to_reliability() {
        let old = part("case-old", Category::Case, 80, 1.0);
        let new = part("case-new", Category::Case, 92, 1.0);
        assert_eq!(render(Category::Case, Some(&old), &new).1, "+15% reliability");
        assert_eq!(render(Category::Case, None, &new).1, "Trust score 92");
    }
}
