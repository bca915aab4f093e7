use hound::{SampleFormat, WavSpec, WavWriter};
use klatt_vowel::{Vowel, VowelParms};

const SAMPLE_RATE: u32 = 16000;

fn parms(vowel: Vowel) -> VowelParms {
    VowelParms {
        duration: SAMPLE_RATE as usize,
        f0: 120.0,
        formants: vowel.formants(),
        sample_rate: f64::from(SAMPLE_RATE),
    }
}

fn run_generate_vowel(vowel: Vowel, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let sound = parms(vowel).synthesize()?.normalize_rms(0.18)?;
    let mut wav = WavWriter::create(
        path,
        WavSpec {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        },
    )?;
    for &sample in &sound {
        wav.write_sample(sample as f32)?;
    }
    wav.finalize()?;
    log::info!("wrote {} samples of {vowel:?} to {path}", sound.len());
    Ok(())
}

fn main() {
    env_logger::init();
    for (vowel, path) in [(Vowel::A, "a.wav"), (Vowel::I, "i.wav"), (Vowel::U, "u.wav")] {
        if let Err(error) = run_generate_vowel(vowel, path) {
            println!("Error: {error}");
            std::process::exit(1);
        }
    }
}
