use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::floating_elements::FloatingElements;
use crate::components::lead_form::LeadFormSection;
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::config::{self, CONTACT_EMAIL, CONTACT_PHONE, WHATSAPP_GROUP_LINK};
use crate::lead::emailjs::EmailJsClient;

struct Benefit {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 3],
}

const BENEFITS_FOR_FAMILIES: [Benefit; 2] = [
    Benefit {
        title: "Segurança Total",
        description: "Deixe seus filhos com alguém realmente preparada para qualquer situação",
        features: ["Primeiros socorros", "Gestão de emergências", "Cuidados especializados"],
    },
    Benefit {
        title: "Tranquilidade",
        description: "Confiança total no dia a dia, sabendo que seu filho está em boas mãos",
        features: ["Rotina estruturada", "Desenvolvimento emocional", "Comunicação constante"],
    },
];

const BENEFITS_FOR_CAREGIVERS: [Benefit; 2] = [
    Benefit {
        title: "Profissão Valorizada",
        description: "Transforme sua paixão por crianças em uma carreira de sucesso",
        features: ["Certificação reconhecida", "Oportunidades premium", "Networking profissional"],
    },
    Benefit {
        title: "Mercado Global",
        description: "Abra portas para trabalhar no Brasil e no exterior com nossa formação",
        features: ["Hotéis internacionais", "Famílias expatriadas", "Cruzeiros de luxo"],
    },
];

const STATS: [(&str, &str); 4] = [
    ("7.000+", "Cuidadoras Capacitadas"),
    ("15+", "Anos de Experiência"),
    ("100%", "Satisfação das Famílias"),
    ("50+", "Países Atendidos"),
];

const HERO_STATS: [(&str, &str); 3] = [
    ("7.000+", "Vidas Transformadas"),
    ("15+", "Anos de Sucesso"),
    ("100%", "Satisfação"),
];

const RISKS: [(&str, &str); 3] = [
    ("🚨", "Emergências médicas"),
    ("😰", "Crises emocionais"),
    ("🆘", "Situações imprevistas"),
];

const CREDENTIALS: [&str; 3] = [
    "Mais de 7.000 cuidadoras capacitadas",
    "Reconhecimento de famílias, hotéis e resorts",
    "Método prático e direto para transformar cuidado em profissão",
];

fn benefit_column(heading: &str, tagline: &str, benefits: &[Benefit], quote: &str) -> Html {
    html! {
        <div class="benefit-column">
            <h3>{heading}</h3>
            <p class="benefit-tagline">{tagline}</p>
            { for benefits.iter().map(|benefit| html! {
                <div class="benefit-card">
                    <h4>{benefit.title}</h4>
                    <p>{benefit.description}</p>
                    <div class="benefit-features">
                        { for benefit.features.iter().map(|feature| html! {
                            <span class="benefit-feature">{*feature}</span>
                        }) }
                    </div>
                    <p class="benefit-quote">{quote}</p>
                </div>
            }) }
        </div>
    }
}

fn cta_link(label: &str) -> Html {
    html! {
        <a class="cta-button" href={WHATSAPP_GROUP_LINK} target="_blank" rel="noopener noreferrer">
            {label.to_string()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub mailer: EmailJsClient,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let is_visible = use_state(|| false);

    {
        let is_visible = is_visible.clone();
        use_mount(move || {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            is_visible.set(true);
        });
    }

    let reveal = classes!("reveal", (*is_visible).then(|| "visible"));
    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>

            <section class="hero">
                <FloatingElements />
                <div class="hero-content">
                    <div class={classes!(reveal.clone(), "hero-icon")}>{"👶"}</div>
                    <h1 class={reveal.clone()}>
                        {"Confiança não se "}<span class="accent">{"improvisa"}</span>{","}<br />
                        <span class="gradient-text">{"SE CONSTRÓI!"}</span>
                    </h1>
                    <p class={classes!(reveal.clone(), "hero-subtitle")}>
                        {"A formação que já transformou a vida de "}
                        <span class="pill">{"+7.000 cuidadoras"}</span>
                        {" infantis em todo o Brasil agora pode mudar a sua realidade como mãe, família ou futura profissional."}
                    </p>
                    <div class={reveal.clone()}>
                        { cta_link("QUERO FAZER PARTE DO GRUPO EXCLUSIVO") }
                        <p class="hero-note">
                            {"✨ ATENÇÃO: Vagas limitadas • Acesso 100% gratuito • Transformação garantida"}
                        </p>
                    </div>
                    <div class="hero-stats">
                        { for HERO_STATS.iter().enumerate().map(|(index, (number, label))| html! {
                            <div
                                class={classes!(reveal.clone(), "hero-stat")}
                                style={format!("transition-delay: {}ms;", 2000 + index * 200)}
                            >
                                <div class="stat-number">{*number}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="alert-section">
                <div class="section-badge">{"ALERTA DE SEGURANÇA"}</div>
                <h2>
                    {"Você confiaria"}<br />
                    <span class="accent">{"o seu filho ou filha"}</span><br />
                    {"a alguém sem preparo?"}
                </h2>
                <div class="impact-card">
                    <div class="impact-label">{"⚠️ REFLEXÃO IMPORTANTE"}</div>
                    <p class="impact-lead">{"Cuidar de uma criança não é apenas brincar."}</p>
                    <p>{"É estar pronto para agir com segurança quando mais importa, garantindo proteção e desenvolvimento em cada momento."}</p>
                    <div class="risk-list">
                        { for RISKS.iter().map(|(icon, text)| html! {
                            <div class="risk">
                                <span class="risk-icon">{*icon}</span>
                                <span>{*text}</span>
                            </div>
                        }) }
                    </div>
                </div>
                { cta_link("A SOLUÇÃO EXISTE E ESTÁ AQUI!") }
            </section>

            <section class="specialist-section">
                <div class="section-badge">{"CONHEÇA A ESPECIALISTA"}</div>
                <h2>{"Carla Mujaes"}<br /><span class="accent">{"fundadora da Bebê Sitter"}</span></h2>
                <p>
                    {"Há mais de 15 anos, ajudo famílias a encontrarem tranquilidade e formo cuidadoras que hoje são referência no Brasil e no exterior."}
                </p>
                <ul class="credentials">
                    { for CREDENTIALS.iter().map(|credential| html! {
                        <li>{"✔ "}{*credential}</li>
                    }) }
                </ul>
                <div class="specialist-badges">
                    { for ["15+ Anos", "7k+ Formadas", "Internacional"].iter().map(|badge| html! {
                        <span class="pill">{*badge}</span>
                    }) }
                </div>
            </section>

            <section class="stats-section">
                <h3>{"NÚMEROS QUE IMPRESSIONAM"}</h3>
                <div class="stats-grid">
                    { for STATS.iter().map(|(number, label)| html! {
                        <div class="stat">
                            <div class="stat-number">{*number}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }) }
                </div>
                <p class="stats-note">{"🚀 Mais de uma década transformando vidas! 🚀"}</p>
            </section>

            <section class="benefits-section">
                <div class="section-badge">{"BENEFÍCIOS TRANSFORMADORES"}</div>
                <h2>{"Para Cada Pessoa,"}<br /><span class="accent">{"Uma Oportunidade Única"}</span></h2>
                <div class="benefit-columns">
                    { benefit_column(
                        "👨‍👩‍👧‍👦 PARA MÃES E FAMÍLIAS",
                        "Transforme sua tranquilidade e qualidade de vida",
                        &BENEFITS_FOR_FAMILIES,
                        "💖 “Finalmente posso ter paz de espírito!”",
                    ) }
                    { benefit_column(
                        "👩‍💼 PARA CUIDADORAS",
                        "Transforme sua paixão em uma carreira de sucesso",
                        &BENEFITS_FOR_CAREGIVERS,
                        "🚀 “Minha vida profissional decolou!”",
                    ) }
                </div>
            </section>

            <section class="testimonials-section">
                <div class="section-badge">{"HISTÓRIAS REAIS DE TRANSFORMAÇÃO"}</div>
                <h2>{"Vidas Transformadas"}<br />{"Resultados Reais"}</h2>
                <p>{"Mais de 7.000 pessoas já mudaram suas vidas. Agora é a sua vez!"}</p>
                <TestimonialCarousel />
                <div class="testimonials-cta">
                    <h3>{"🔥 SUA HISTÓRIA PODE SER A PRÓXIMA!"}</h3>
                    { cta_link("QUERO MINHA TRANSFORMAÇÃO AGORA!") }
                </div>
            </section>

            <section class="contact-section" id="contato">
                <div class="section-badge">{"ENTRE EM CONTATO CONOSCO"}</div>
                <h2>{"Está Pronta Para"}<br />{"Transformar Sua Vida?"}</h2>
                <p>
                    {"Deixe seus dados e nossa equipe entrará em contato com você em até 24 horas com informações exclusivas sobre o curso Bebê Sitter"}
                </p>
                <LeadFormSection mailer={props.mailer.clone()} />
                <div class="direct-contact">
                    <h4>{"Ou entre em contato diretamente:"}</h4>
                    <a class="contact-chip" href={format!("mailto:{}", CONTACT_EMAIL)}>{"✉ "}{CONTACT_EMAIL}</a>
                    <a class="contact-chip" href={config::whatsapp_chat_link()} target="_blank" rel="noopener noreferrer">
                        {"💬 "}{CONTACT_PHONE}
                    </a>
                </div>
            </section>

            <section class="final-cta">
                <div class="section-badge">{"🚨 ÚLTIMAS VAGAS DISPONÍVEIS"}</div>
                <h2>{"SUA VEZ"}<br />{"de dar o próximo passo!"}</h2>
                <p>
                    {"Entre para o grupo exclusivo com a especialista Carla Mujaes. Lá você vai receber acesso ao encontro online gratuito, onde Carla vai revelar como funciona a formação completa."}
                </p>
                { cta_link("QUERO FAZER PARTE DO GRUPO EXCLUSIVO") }
            </section>

            <footer class="landing-footer">
                <h3>{"Bebê Sitter"}</h3>
                <p>{"Sua Baby Sitter de Confiança"}</p>
                <p class="footer-mission">
                    {"Transformar o cuidado infantil através da educação especializada, conectando famílias a profissionais qualificadas e criando oportunidades de carreira únicas no mercado."}
                </p>
                <p class="footer-copy">{format!("© {} Bebê Sitter. Todos os direitos reservados.", year)}</p>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #1f2937;
        background: linear-gradient(135deg, #f8fafc, #eff6ff);
    }
    .landing-page section {
        position: relative;
        overflow: hidden;
        padding: 96px 16px;
        text-align: center;
    }
    .landing-page h2 {
        font-size: 3rem;
        font-weight: 900;
        margin-bottom: 24px;
    }
    .accent { color: #fde047; }
    .gradient-text {
        background: linear-gradient(90deg, #fde047, #fdba74);
        -webkit-background-clip: text;
        color: transparent;
    }
    .pill {
        display: inline-block;
        background: #fde047;
        color: #111827;
        padding: 4px 12px;
        border-radius: 9999px;
        font-weight: 900;
        margin: 4px;
    }
    .section-badge {
        display: inline-block;
        background: linear-gradient(90deg, #facc15, #fb923c);
        color: #111827;
        padding: 12px 32px;
        border-radius: 9999px;
        font-weight: 700;
        margin-bottom: 32px;
    }
    .cta-button {
        display: inline-block;
        background: linear-gradient(90deg, #facc15, #fb923c, #facc15);
        background-size: 200% 200%;
        color: #111827;
        padding: 24px 40px;
        border: none;
        border-radius: 9999px;
        font-weight: 900;
        font-size: 1.25rem;
        text-decoration: none;
        cursor: pointer;
        transition: transform 0.3s ease;
    }
    .cta-button:hover { transform: scale(1.05); }
    .cta-button:disabled { opacity: 0.7; cursor: wait; transform: none; }

    .reveal {
        opacity: 0;
        transform: translateY(40px);
        transition: all 1s ease;
    }
    .reveal.visible {
        opacity: 1;
        transform: translateY(0);
    }

    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        color: white;
        background: linear-gradient(135deg, #ec4899, #a855f7, #2563eb);
    }
    .hero-content { position: relative; max-width: 1152px; }
    .hero-icon { font-size: 4rem; margin-bottom: 32px; }
    .hero h1 { font-size: 4.5rem; font-weight: 700; line-height: 1.1; margin-bottom: 32px; }
    .hero-subtitle { font-size: 1.5rem; max-width: 900px; margin: 0 auto 40px; }
    .hero-note { margin-top: 24px; color: #fef08a; }
    .hero-stats { display: flex; justify-content: center; gap: 32px; margin-top: 48px; }
    .stat-number { font-size: 2rem; font-weight: 900; color: #fde047; }
    .floating-dot {
        position: absolute;
        width: 8px;
        height: 8px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.2);
    }
    @keyframes float {
        0%, 100% { transform: translateY(0) rotate(0deg); }
        33% { transform: translateY(-10px) rotate(120deg); }
        66% { transform: translateY(10px) rotate(240deg); }
    }

    .alert-section { color: white; background: linear-gradient(135deg, #ef4444, #f97316, #ec4899); }
    .impact-card {
        background: white;
        color: #1f2937;
        max-width: 896px;
        margin: 0 auto 48px;
        padding: 48px;
        border-radius: 24px;
    }
    .impact-label { font-weight: 700; color: #ef4444; margin-bottom: 16px; }
    .impact-lead { font-size: 1.75rem; font-weight: 700; }
    .risk-list { display: flex; justify-content: center; gap: 16px; flex-wrap: wrap; margin-top: 24px; }
    .risk { padding: 12px 20px; border-radius: 16px; background: #fee2e2; font-weight: 700; }
    .risk-icon { margin-right: 8px; }

    .specialist-section { color: white; background: linear-gradient(135deg, #9333ea, #2563eb, #4f46e5); }
    .credentials { list-style: none; padding: 0; font-size: 1.25rem; }
    .credentials li { margin: 12px 0; }

    .stats-section { color: white; background: linear-gradient(90deg, #111827, #581c87, #1e3a8a); }
    .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 32px; max-width: 1152px; margin: 0 auto; }
    .stats-note { margin-top: 48px; font-size: 1.5rem; font-weight: 700; }

    .benefit-columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 48px; max-width: 1152px; margin: 0 auto; }
    .benefit-card { background: white; border-radius: 24px; padding: 32px; margin-bottom: 24px; box-shadow: 0 16px 32px rgba(0, 0, 0, 0.1); }
    .benefit-feature { display: inline-block; background: #f3e8ff; color: #6b21a8; border-radius: 9999px; padding: 4px 12px; margin: 4px; font-size: 0.875rem; }
    .benefit-quote { font-style: italic; color: #db2777; margin-top: 16px; }

    .testimonials-section { color: white; background: linear-gradient(135deg, #111827, #581c87, #1e3a8a); }
    .featured-testimonial {
        position: relative;
        background: white;
        color: #1f2937;
        max-width: 896px;
        margin: 0 auto 64px;
        padding: 40px;
        border-radius: 24px;
    }
    .featured-badge { font-weight: 700; margin-bottom: 16px; }
    .star { color: #facc15; }
    .star-large { font-size: 2rem; }
    .featured-text { font-size: 1.5rem; font-style: italic; margin: 24px 0; }
    .featured-author { display: inline-flex; align-items: center; gap: 24px; }
    .avatar {
        width: 64px;
        height: 64px;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        color: white;
        font-weight: 700;
        background: linear-gradient(135deg, #f472b6, #a855f7);
    }
    .author-details { text-align: left; }
    .highlight-badge { background: #22c55e; color: white; padding: 4px 12px; border-radius: 9999px; font-size: 0.75rem; font-weight: 700; }
    .featured-result { margin-top: 24px; padding: 16px; border-radius: 12px; background: #f0fdf4; color: #15803d; font-weight: 700; }
    .testimonial-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 32px; margin-bottom: 48px; }
    .testimonial-card {
        position: relative;
        background: white;
        color: #1f2937;
        padding: 24px;
        border-radius: 16px;
        cursor: pointer;
        transition: transform 0.3s ease;
        outline: 4px solid transparent;
    }
    .testimonial-card.selected { transform: scale(1.05); outline-color: #facc15; }
    .card-text { font-size: 0.875rem; }
    .card-role { font-size: 0.75rem; color: #6b7280; }
    .card-result { font-size: 0.75rem; font-weight: 700; color: #15803d; }
    .focus-badge { position: absolute; top: -12px; right: -12px; background: #facc15; color: #111827; padding: 4px 12px; border-radius: 9999px; font-size: 0.75rem; font-weight: 700; }
    .carousel-controls { display: flex; justify-content: center; align-items: center; gap: 24px; }
    .carousel-arrow { width: 56px; height: 56px; border: none; border-radius: 50%; color: white; font-size: 1.5rem; cursor: pointer; background: linear-gradient(90deg, #ec4899, #a855f7); }
    .carousel-dots { display: flex; gap: 12px; }
    .carousel-dot { width: 16px; height: 16px; border: none; border-radius: 50%; background: #6b7280; cursor: pointer; transition: all 0.3s ease; }
    .carousel-dot.active { background: #facc15; transform: scale(1.25); }
    .testimonials-cta { margin-top: 64px; padding: 32px; border-radius: 24px; background: linear-gradient(90deg, #facc15, #f97316, #ef4444); }

    .contact-section { color: white; background: linear-gradient(135deg, #4f46e5, #9333ea, #db2777); }
    .lead-form {
        max-width: 720px;
        margin: 0 auto;
        padding: 48px;
        text-align: left;
        border-radius: 24px;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(255, 255, 255, 0.1);
    }
    .lead-field { margin-bottom: 32px; }
    .lead-field label { display: block; font-weight: 700; font-size: 1.125rem; margin-bottom: 12px; }
    .lead-input {
        width: 100%;
        box-sizing: border-box;
        padding: 16px 24px;
        font-size: 1.125rem;
        color: white;
        border-radius: 16px;
        border: 2px solid rgba(255, 255, 255, 0.3);
        background: rgba(255, 255, 255, 0.2);
    }
    .lead-input::placeholder { color: rgba(255, 255, 255, 0.6); }
    .lead-input:focus { outline: none; border-color: #facc15; }
    .lead-input.has-error { border-color: #f87171; }
    .field-error { display: block; margin-top: 4px; color: #fca5a5; font-size: 0.875rem; }
    .lead-consent { display: flex; align-items: flex-start; gap: 16px; }
    .lead-consent input { margin-top: 4px; width: 20px; height: 20px; accent-color: #facc15; }
    .lead-submit { text-align: center; padding-top: 24px; }
    .lead-privacy { margin-top: 16px; color: #fef08a; font-size: 0.875rem; }
    .lead-status { margin-top: 16px; font-size: 0.875rem; font-weight: 500; }
    .status-sending { color: #bfdbfe; }
    .status-success { color: #86efac; }
    .status-error { color: #fca5a5; }
    .direct-contact { margin-top: 48px; }
    .contact-chip {
        display: inline-block;
        margin: 8px 12px;
        padding: 12px 24px;
        color: white;
        text-decoration: none;
        border-radius: 16px;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(255, 255, 255, 0.1);
    }

    .final-cta { color: white; min-height: 100vh; background: linear-gradient(135deg, #db2777, #9333ea, #2563eb); }
    .landing-footer { padding: 64px 16px; text-align: center; color: #d1d5db; background: #111827; }
    .landing-footer h3 { font-size: 2.5rem; font-weight: 900; color: white; }
    .footer-mission { max-width: 720px; margin: 24px auto; }
    .footer-copy { font-size: 0.875rem; color: #9ca3af; }

    @media (max-width: 768px) {
        .hero h1 { font-size: 3rem; }
        .landing-page h2 { font-size: 2.25rem; }
        .lead-form { padding: 24px; }
        .hero-stats { gap: 16px; }
    }
"#;
