use super::normalize::measure;
use super::types::NormalizedContent;

/// Canned content for hosts whose name contains any of `needles`.
pub struct SampleRule {
    pub name: &'static str,
    pub needles: &'static [&'static str],
    pub title: &'static str,
    body: &'static str,
}

impl SampleRule {
    pub fn matches(&self, host: &str) -> bool {
        self.needles.iter().any(|n| host.contains(n))
    }
}

pub const GENERIC_SAMPLE: &str = "generic";

/// Evaluated in order; first match wins, anything else gets the generic sample.
pub static SAMPLE_RULES: [SampleRule; 2] = [
    SampleRule {
        name: "networking",
        needles: &["netacad", "cisco"],
        title: "CCNA - Introduction to Networks",
        body: NETWORKING_BODY,
    },
    SampleRule {
        name: "repository",
        needles: &["github"],
        title: "Repositorio de Código",
        body: REPOSITORY_BODY,
    },
];

/// Name of the sample `select` would return for `host`.
pub fn sample_name(host: &str) -> &'static str {
    SAMPLE_RULES.iter().find(|r| r.matches(host)).map(|r| r.name).unwrap_or(GENERIC_SAMPLE)
}

/// Synthetic content for `host`. Never marked as accepted.
pub fn select(host: &str) -> NormalizedContent {
    match SAMPLE_RULES.iter().find(|r| r.matches(host)) {
        Some(rule) => measure(rule.title.to_string(), rule.body.trim().to_string(), false),
        None => measure(format!("Contenido de {host}"), generic_body(host).trim().to_string(), false),
    }
}

fn generic_body(host: &str) -> String {
    format!(r#"
⚠️ CONTENIDO SIMULADO ⚠️

Este es contenido simulado porque no se pudo extraer el texto real de {host}.

Para extraer contenido real, usa una de estas opciones:

1. SCRIPT DE CONSOLA (Recomendado):
   - Ve a la página que quieres extraer
   - Abre la consola (F12)
   - Pega el script de extracción
   - Descarga automáticamente el archivo TXT

2. EXTENSIÓN DE NAVEGADOR:
   - Web Scraper
   - Text Extractor
   - Mercury Reader

3. HERRAMIENTAS PROFESIONALES:
   - Screaming Frog
   - Beautiful Soup (Python)
   - APIs de scraping

LIMITACIONES DEL NAVEGADOR:
- CORS bloquea solicitudes entre dominios
- Políticas de seguridad web
- Protecciones anti-scraping

Para contenido real de {host}, usa el script de consola directamente en la página.
"#)
}

const NETWORKING_BODY: &str = r#"
Módulo 1: Las redes en la actualidad

Las redes han transformado la forma en que vivimos, trabajamos, jugamos y aprendemos. Las redes permiten que las personas se conecten, colaboren e interactúen de maneras que anteriormente no eran posibles.

1.1 Las redes globalmente conectadas
En la actualidad, estamos experimentando una explosión de datos globales. El crecimiento del número de usuarios de Internet, junto con la proliferación de dispositivos habilitados para la red, continúa generando más datos que nunca.

1.2 Tendencias de redes
Varias tendencias de redes están afectando las organizaciones y los consumidores:
- Bring Your Own Device (BYOD)
- Colaboración en línea
- Comunicaciones de video
- Computación en la nube

1.3 Arquitecturas de red
Para admitir el envío inmediato de los millones de mensajes que se intercambian entre las personas de todo el mundo, confiamos en una red de redes.

1.4 La arquitectura de Internet
Internet es una colección de redes interconectadas. No hay una organización que sea propietaria de Internet. El control de Internet se distribuye entre muchas organizaciones.

Módulo 2: Configuración básica de switches y terminales

Este módulo presenta los conceptos básicos de configuración de dispositivos de red Cisco IOS.

2.1 Cisco IOS
Los sistemas operativos de Cisco se denominan Cisco Internetwork Operating System (IOS). Cisco IOS se usa para la mayoría de los dispositivos de Cisco, independientemente del tipo o tamaño del dispositivo.

2.2 Acceso a un switch de Cisco
Un switch funcionará sin ninguna configuración. Simplemente conecte los dispositivos y el switch reenviará datos entre esos dispositivos.

Laboratorio práctico:
- Configuración inicial del switch
- Configuración de contraseñas
- Configuración de banners
- Guardar configuraciones
"#;

const REPOSITORY_BODY: &str = r#"
README.md

# Proyecto Web Mapper

Este proyecto es una aplicación React para mapear sitios web y extraer contenido.

## Características

- Extracción de texto de páginas web
- Análisis de contenido
- Exportación a JSON y CSV
- Interfaz intuitiva

## Instalación

```bash
npm install
npm start
```

## Uso

1. Ingresa una URL
2. Selecciona el tipo de extracción
3. Haz clic en "Extraer Contenido"

## Tecnologías

- React 19
- Tailwind CSS
- Lucide React
- Docker

## Contribuir

Las contribuciones son bienvenidas. Por favor abre un issue primero.

## Licencia

MIT License
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn networking_hosts_match_first() {
        for host in ["www.netacad.com", "cisco.com", "github.cisco.com"] {
            let c = select(host);
            assert_eq!(c.title, "CCNA - Introduction to Networks", "host {host}");
            assert!(!c.accepted);
        }
        assert_eq!(sample_name("netacad-on-github.io"), "networking");
    }

    #[test]
    fn github_hosts_get_repository_sample() {
        let c = select("github.com");
        assert_eq!(c.title, "Repositorio de Código");
        assert!(c.body.starts_with("README.md"));
        assert!(c.body.ends_with("MIT License"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(sample_name("GitHub.com"), GENERIC_SAMPLE);
        assert_eq!(sample_name("CISCO.COM"), GENERIC_SAMPLE);
    }

    #[test]
    fn generic_sample_embeds_host() {
        let c = select("example.org");
        assert_eq!(c.title, "Contenido de example.org");
        assert!(c.body.starts_with("⚠️ CONTENIDO SIMULADO ⚠️"));
        assert!(c.body.contains("texto real de example.org."));
        assert!(c.body.ends_with("directamente en la página."));

        let empty = select("");
        assert_eq!(empty.title, "Contenido de ");
    }

    #[test]
    fn metrics_match_counting_rules() {
        for host in ["netacad.com", "github.com", "example.org"] {
            let c = select(host);
            assert_eq!(c.word_count, c.body.split(' ').count());
            assert_eq!(c.char_count, c.body.encode_utf16().count());
            assert_eq!(c.paragraph_count, c.body.lines().filter(|l| !l.trim().is_empty()).count());
            assert_eq!(c.body, c.body.trim());
        }
    }

    #[test]
    fn selection_is_deterministic() {
        assert_eq!(select("www.netacad.com"), select("www.netacad.com"));
        assert_eq!(select("docs.rs"), select("docs.rs"));
    }
}
