use particle_kinematics::{Particle, Species};

fn main() {
    let mut proton = Particle::of(Species::Proton).with_momentum(200.0);
    println!("{}", proton.info());
    proton.set_beta(0.8);
    println!("beta: {}", proton.beta());

    let mut alpha = Particle::of(Species::Alpha).with_momentum(20.0);
    alpha.set_energy(10_000.0);
    println!("{}", alpha.info());
    println!(
        "momentum: {:.2} MeV/c, energy: {:.2} MeV",
        alpha.momentum(),
        alpha.energy()
    );
}
